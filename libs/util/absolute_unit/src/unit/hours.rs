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
use crate::{Dimension, TimeUnit, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Hours;
impl Unit for Hours {
    const UNIT_NAME: &'static str = "hours";
    const UNIT_SHORT_NAME: &'static str = "h";
    const UNIT_SUFFIX: &'static str = "h";
    const DIMENSION: Dimension = Dimension::TIME;
}
impl TimeUnit for Hours {
    const SECONDS_IN_UNIT: f64 = 3_600.;
}

#[macro_export]
macro_rules! hours {
    ($num:expr) => {
        $crate::Time::<$crate::Hours>::from(&$num)
    };
}
