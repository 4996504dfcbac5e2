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
    supports_shift_ops, supports_value_type_conversion, Amount, AmountUnit, DynamicUnits, Mass,
    MassUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

/// mass / amount of substance
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct MolarMass<UnitMass: MassUnit, UnitAmount: AmountUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitMass>,
    phantom_2: PhantomData<UnitAmount>,
}
supports_absdiffeq!(MolarMass<A, B>, A: MassUnit, B: AmountUnit);
supports_cancellation!(
    MolarMass<A1, B1>,
    MolarMass<A2, B2>,
    A1: MassUnit,
    B1: AmountUnit,
    A2: MassUnit,
    B2: AmountUnit,
);
supports_quantity_ops!(MolarMass<A, B>, A: MassUnit, B: AmountUnit);
supports_scalar_ops!(MolarMass<A, B>, A: MassUnit, B: AmountUnit);
supports_shift_ops!(
    MolarMass<A1, B1>,
    MolarMass<A2, B2>,
    A1: MassUnit,
    B1: AmountUnit,
    A2: MassUnit,
    B2: AmountUnit,
);
supports_value_type_conversion!(MolarMass<A, B>, A: MassUnit, B: AmountUnit);

impl<M, N> fmt::Display for MolarMass<M, N>
where
    M: MassUnit,
    N: AmountUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}", M::UNIT_SHORT_NAME, N::UNIT_SHORT_NAME)
    }
}

impl<'a, MA, NA, MB, NB> From<&'a MolarMass<MA, NA>> for MolarMass<MB, NB>
where
    MA: MassUnit,
    NA: AmountUnit,
    MB: MassUnit,
    NB: AmountUnit,
{
    fn from(v: &'a MolarMass<MA, NA>) -> Self {
        let mass_ratio = MA::GRAMS_IN_UNIT / MB::GRAMS_IN_UNIT;
        let amount_ratio = NB::MOLES_IN_UNIT / NA::MOLES_IN_UNIT;
        Self::from_ordered_float(v.v * mass_ratio * amount_ratio)
    }
}

impl<M, N> MolarMass<M, N>
where
    M: MassUnit,
    N: AmountUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
            phantom_2: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new1o1::<M, N>(self.v)
    }
}

impl<MA, NA, NB> Mul<Amount<NB>> for MolarMass<MA, NA>
where
    MA: MassUnit,
    NA: AmountUnit,
    NB: AmountUnit,
{
    type Output = Mass<MA>;

    fn mul(self, other: Amount<NB>) -> Self::Output {
        Mass::<MA>::from(self.v.0 * Amount::<NA>::from(&other).f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{grams, grams_per_mole, kilograms_per_kilomole, kilograms_per_mole, moles};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_molar_mass() {
        let water = kilograms_per_mole!(0.018);
        println!("{}", water);
        println!("{}", grams_per_mole!(water));
        assert_abs_diff_eq!(grams_per_mole!(water), grams_per_mole!(18), epsilon = 1e-12);
        // kg/kmol and g/mol are numerically identical.
        assert_abs_diff_eq!(
            kilograms_per_kilomole!(water).f64(),
            grams_per_mole!(water).f64(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_molar_mass_times_amount() {
        assert_abs_diff_eq!(grams_per_mole!(18) * moles!(2), grams!(36));
    }
}
