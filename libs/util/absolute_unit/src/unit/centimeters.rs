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
use crate::{Dimension, LengthUnit, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Centimeters;
impl Unit for Centimeters {
    const UNIT_NAME: &'static str = "centimeters";
    const UNIT_SHORT_NAME: &'static str = "cm";
    const UNIT_SUFFIX: &'static str = "cm";
    const DIMENSION: Dimension = Dimension::LENGTH;
}
impl LengthUnit for Centimeters {
    const METERS_IN_UNIT: f64 = 0.01;
}

#[macro_export]
macro_rules! centimeters {
    ($num:expr) => {
        $crate::Length::<$crate::Centimeters>::from(&$num)
    };
}

#[macro_export]
macro_rules! centimeters2 {
    ($num:expr) => {
        $crate::Area::<$crate::Centimeters>::from(&$num)
    };
}

#[macro_export]
macro_rules! centimeters3 {
    ($num:expr) => {
        $crate::Volume::<$crate::Centimeters>::from(&$num)
    };
}

#[macro_export]
macro_rules! centimeters2_per_second {
    ($num:expr) => {
        $crate::Diffusivity::<$crate::Centimeters, $crate::Seconds>::from(&$num)
    };
}
