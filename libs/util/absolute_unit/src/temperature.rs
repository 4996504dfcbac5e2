// This file is part of Drizzle.
//
// Drizzle is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Drizzle is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Drizzle.  If not, see <http://www.gnu.org/licenses/>.
use crate::Unit;
use std::fmt::Debug;

/// A temperature scale.
///
/// Temperatures only appear here as the "per kelvin" in gas constants, which care about the size
/// of a degree rather than where the scale starts. The affine conversions are kept alongside so a
/// scale is fully described by its unit.
pub trait TemperatureUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    /// Size of one degree of this scale, in kelvin.
    const KELVIN_IN_DEGREE: f64;

    fn convert_to_kelvin(degrees_in: f64) -> f64;
    fn convert_from_kelvin(degrees_k: f64) -> f64;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Celsius, Dimension, Kelvin};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_celsius_to_kelvin() {
        assert_abs_diff_eq!(Celsius::convert_to_kelvin(20.), 293.15, epsilon = 1e-9);
        assert_abs_diff_eq!(Celsius::convert_from_kelvin(273.15), 0., epsilon = 1e-9);
        assert_eq!(Kelvin::convert_to_kelvin(300.), 300.);
    }

    #[test]
    fn test_degree_sizes() {
        assert_eq!(Kelvin::KELVIN_IN_DEGREE, Celsius::KELVIN_IN_DEGREE);
        assert_eq!(Kelvin::DIMENSION, Dimension::TEMPERATURE);
        assert_eq!(Celsius::DIMENSION, Dimension::TEMPERATURE);
    }
}
