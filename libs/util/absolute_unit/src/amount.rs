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
    supports_shift_ops, supports_value_type_conversion, DynamicUnits, Unit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData};

/// Amount of substance.
pub trait AmountUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const MOLES_IN_UNIT: f64;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Amount<UnitAmount: AmountUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitAmount>,
}
supports_absdiffeq!(Amount<A>, A: AmountUnit);
supports_cancellation!(Amount<A1>, Amount<A2>, A1: AmountUnit, A2: AmountUnit);
supports_quantity_ops!(Amount<A>, A: AmountUnit);
supports_scalar_ops!(Amount<A>, A: AmountUnit);
supports_shift_ops!(Amount<A1>, Amount<A2>, A1: AmountUnit, A2: AmountUnit);
supports_value_type_conversion!(Amount<A>, A: AmountUnit);

impl<N> fmt::Display for Amount<N>
where
    N: AmountUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", N::UNIT_SUFFIX)
    }
}

impl<'a, NA, NB> From<&'a Amount<NA>> for Amount<NB>
where
    NA: AmountUnit,
    NB: AmountUnit,
{
    fn from(v: &'a Amount<NA>) -> Self {
        Self::from_ordered_float(v.v * NA::MOLES_IN_UNIT / NB::MOLES_IN_UNIT)
    }
}

impl<N> Amount<N>
where
    N: AmountUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new1o0::<N>(self.v)
    }
}

#[cfg(test)]
mod test {
    use crate::{kilomoles, moles};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_amount() {
        assert_abs_diff_eq!(moles!(kilomoles!(2)), moles!(2_000));
        assert_abs_diff_eq!(kilomoles!(1) + moles!(500), kilomoles!(1.5));
    }
}
