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
use crate::{AmountUnit, Dimension, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Moles;
impl Unit for Moles {
    const UNIT_NAME: &'static str = "moles";
    const UNIT_SHORT_NAME: &'static str = "mol";
    const UNIT_SUFFIX: &'static str = "mol";
    const DIMENSION: Dimension = Dimension::AMOUNT;
}
impl AmountUnit for Moles {
    const MOLES_IN_UNIT: f64 = 1.;
}

#[macro_export]
macro_rules! moles {
    ($num:expr) => {
        $crate::Amount::<$crate::Moles>::from(&$num)
    };
}
