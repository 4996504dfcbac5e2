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
use crate::{Dimension, MassUnit, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Grams;
impl Unit for Grams {
    const UNIT_NAME: &'static str = "grams";
    const UNIT_SHORT_NAME: &'static str = "g";
    const UNIT_SUFFIX: &'static str = "g";
    const DIMENSION: Dimension = Dimension::MASS;
}
impl MassUnit for Grams {
    const GRAMS_IN_UNIT: f64 = 1.0;
}

#[macro_export]
macro_rules! grams {
    ($num:expr) => {
        $crate::Mass::<$crate::Grams>::from(&$num)
    };
}

#[macro_export]
macro_rules! grams_per_centimeter3 {
    ($num:expr) => {
        $crate::Density::<$crate::Grams, $crate::Centimeters>::from(&$num)
    };
}

#[macro_export]
macro_rules! grams_per_mole {
    ($num:expr) => {
        $crate::MolarMass::<$crate::Grams, $crate::Moles>::from(&$num)
    };
}

#[macro_export]
macro_rules! poise {
    ($num:expr) => {
        $crate::DynamicViscosity::<$crate::Grams, $crate::Centimeters, $crate::Seconds>::from(&$num)
    };
}
