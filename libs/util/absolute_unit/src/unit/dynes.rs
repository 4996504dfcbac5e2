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
use crate::{Centimeters, Dimension, ForceUnit, Grams, Seconds, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Dynes;
impl Unit for Dynes {
    const UNIT_NAME: &'static str = "dynes";
    const UNIT_SHORT_NAME: &'static str = "dyn";
    const UNIT_SUFFIX: &'static str = "dyn";
    const DIMENSION: Dimension = Dimension::FORCE;
}
impl ForceUnit for Dynes {
    const NEWTONS_IN_UNIT: f64 = 0.000_01;

    type UnitMass = Grams;
    type UnitLength = Centimeters;
    type UnitTime = Seconds;
}

#[macro_export]
macro_rules! dynes {
    ($num:expr) => {
        $crate::Force::<$crate::Dynes>::from(&$num)
    };
}

#[macro_export]
macro_rules! dynes_per_centimeter {
    ($num:expr) => {
        $crate::SurfaceTension::<$crate::Dynes, $crate::Centimeters>::from(&$num)
    };
}
