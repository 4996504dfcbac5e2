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
use crate::{Dimension, EnergyUnit, Kilograms, Meters, Seconds, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Joules;
impl Unit for Joules {
    const UNIT_NAME: &'static str = "joules";
    const UNIT_SHORT_NAME: &'static str = "J";
    const UNIT_SUFFIX: &'static str = "J";
    const DIMENSION: Dimension = Dimension::ENERGY;
}
impl EnergyUnit for Joules {
    const JOULES_IN_UNIT: f64 = 1.0;

    type UnitMass = Kilograms;
    type UnitLength = Meters;
    type UnitTime = Seconds;
}

#[macro_export]
macro_rules! joules {
    ($num:expr) => {
        $crate::Energy::<$crate::Joules>::from(&$num)
    };
}

#[macro_export]
macro_rules! joules_per_mole_kelvin {
    ($num:expr) => {
        $crate::MolarGasConstant::<$crate::Joules, $crate::Moles, $crate::Kelvin>::from(&$num)
    };
}

#[macro_export]
macro_rules! joules_per_kilogram_kelvin {
    ($num:expr) => {
        $crate::SpecificGasConstant::<$crate::Joules, $crate::Kilograms, $crate::Kelvin>::from(&$num)
    };
}
