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
use crate::{
    supports_absdiffeq, supports_cancellation, supports_quantity_ops, supports_scalar_ops,
    supports_shift_ops, supports_value_type_conversion, DynamicUnits, LengthUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Volume<UnitLength: LengthUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitLength>,
}
supports_absdiffeq!(Volume<A>, A: LengthUnit);
supports_cancellation!(Volume<A1>, Volume<A2>, A1: LengthUnit, A2: LengthUnit);
supports_quantity_ops!(Volume<A>, A: LengthUnit);
supports_scalar_ops!(Volume<A>, A: LengthUnit);
supports_shift_ops!(Volume<A1>, Volume<A2>, A1: LengthUnit, A2: LengthUnit);
supports_value_type_conversion!(Volume<A>, A: LengthUnit);

impl<L> fmt::Display for Volume<L>
where
    L: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}^3", L::UNIT_SHORT_NAME)
    }
}

impl<'a, LA, LB> From<&'a Volume<LA>> for Volume<LB>
where
    LA: LengthUnit,
    LB: LengthUnit,
{
    fn from(v: &'a Volume<LA>) -> Self {
        let ratio = LA::METERS_IN_UNIT / LB::METERS_IN_UNIT;
        Self::from_ordered_float(v.v * ratio * ratio * ratio)
    }
}

impl<L> Volume<L>
where
    L: LengthUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new3o0::<L, L, L>(self.v)
    }
}

#[cfg(test)]
mod test {
    use crate::{centimeters3, meters3};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_volume() {
        // One liter.
        let l = centimeters3!(1_000);
        assert_abs_diff_eq!(meters3!(l), meters3!(0.001), epsilon = 1e-15);
    }
}
