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
use crate::{Dimension, TemperatureUnit, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Celsius;
impl Unit for Celsius {
    const UNIT_NAME: &'static str = "celsius";
    const UNIT_SHORT_NAME: &'static str = "°C";
    const UNIT_SUFFIX: &'static str = "°C";
    const DIMENSION: Dimension = Dimension::TEMPERATURE;
}
impl TemperatureUnit for Celsius {
    const KELVIN_IN_DEGREE: f64 = 1.0;

    fn convert_to_kelvin(degrees_in: f64) -> f64 {
        degrees_in + 273.15
    }

    fn convert_from_kelvin(degrees_k: f64) -> f64 {
        degrees_k - 273.15
    }
}
