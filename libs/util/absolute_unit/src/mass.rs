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
    supports_shift_ops, supports_value_type_conversion, Amount, AmountUnit, Density, DynamicUnits,
    LengthUnit, MolarMass, Unit, Volume,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Div};

pub trait MassUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const GRAMS_IN_UNIT: f64;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Mass<UnitMass: MassUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitMass>,
}
supports_absdiffeq!(Mass<A>, A: MassUnit);
supports_cancellation!(Mass<A1>, Mass<A2>, A1: MassUnit, A2: MassUnit);
supports_quantity_ops!(Mass<A>, A: MassUnit);
supports_scalar_ops!(Mass<A>, A: MassUnit);
supports_shift_ops!(Mass<A1>, Mass<A2>, A1: MassUnit, A2: MassUnit);
supports_value_type_conversion!(Mass<A>, A: MassUnit);

impl<M> fmt::Display for Mass<M>
where
    M: MassUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", M::UNIT_SUFFIX)
    }
}

impl<'a, MA, MB> From<&'a Mass<MA>> for Mass<MB>
where
    MA: MassUnit,
    MB: MassUnit,
{
    fn from(v: &'a Mass<MA>) -> Self {
        Self::from_ordered_float(v.v * MA::GRAMS_IN_UNIT / MB::GRAMS_IN_UNIT)
    }
}

impl<M> Mass<M>
where
    M: MassUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new1o0::<M>(self.v)
    }
}

impl<M, L> Div<Volume<L>> for Mass<M>
where
    M: MassUnit,
    L: LengthUnit,
{
    type Output = Density<M, L>;

    fn div(self, other: Volume<L>) -> Self::Output {
        Density::<M, L>::from(self.v.0 / other.f64())
    }
}

impl<M, N> Div<Amount<N>> for Mass<M>
where
    M: MassUnit,
    N: AmountUnit,
{
    type Output = MolarMass<M, N>;

    fn div(self, other: Amount<N>) -> Self::Output {
        MolarMass::<M, N>::from(self.v.0 / other.f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        grams, grams_per_mole, kilograms, kilograms_per_meter3, kilograms_per_mole, meters3, moles,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mass() {
        let g = grams!(18);
        println!("g : {}", g);
        println!("kg: {}", kilograms!(g));
        assert_abs_diff_eq!(kilograms!(g), kilograms!(0.018));
    }

    #[test]
    fn test_mass_per_volume() {
        assert_abs_diff_eq!(
            kilograms!(1_000) / meters3!(1),
            kilograms_per_meter3!(1_000)
        );
    }

    #[test]
    fn test_mass_per_amount() {
        assert_abs_diff_eq!(
            grams!(18) / moles!(1),
            grams_per_mole!(18)
        );
        assert_abs_diff_eq!(
            kilograms_per_mole!(grams!(18) / moles!(1)),
            kilograms_per_mole!(0.018),
            epsilon = 1e-15
        );
    }
}
