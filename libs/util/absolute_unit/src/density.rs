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
    supports_shift_ops, supports_value_type_conversion, DynamicUnits, LengthUnit, Mass, MassUnit,
    Volume,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

/// mass / length^3
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Density<UnitMass: MassUnit, UnitLength: LengthUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitMass>,
    phantom_2: PhantomData<UnitLength>,
}
supports_absdiffeq!(Density<A, B>, A: MassUnit, B: LengthUnit);
supports_cancellation!(
    Density<A1, B1>,
    Density<A2, B2>,
    A1: MassUnit,
    B1: LengthUnit,
    A2: MassUnit,
    B2: LengthUnit,
);
supports_quantity_ops!(Density<A, B>, A: MassUnit, B: LengthUnit);
supports_scalar_ops!(Density<A, B>, A: MassUnit, B: LengthUnit);
supports_shift_ops!(
    Density<A1, B1>,
    Density<A2, B2>,
    A1: MassUnit,
    B1: LengthUnit,
    A2: MassUnit,
    B2: LengthUnit,
);
supports_value_type_conversion!(Density<A, B>, A: MassUnit, B: LengthUnit);

impl<M, L> fmt::Display for Density<M, L>
where
    M: MassUnit,
    L: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}^3", M::UNIT_SHORT_NAME, L::UNIT_SHORT_NAME)
    }
}

impl<'a, MA, LA, MB, LB> From<&'a Density<MA, LA>> for Density<MB, LB>
where
    MA: MassUnit,
    LA: LengthUnit,
    MB: MassUnit,
    LB: LengthUnit,
{
    fn from(v: &'a Density<MA, LA>) -> Self {
        let mass_ratio = MA::GRAMS_IN_UNIT / MB::GRAMS_IN_UNIT;
        let length_ratio = LB::METERS_IN_UNIT / LA::METERS_IN_UNIT;
        Self::from_ordered_float(v.v * mass_ratio * length_ratio * length_ratio * length_ratio)
    }
}

impl<M, L> Density<M, L>
where
    M: MassUnit,
    L: LengthUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
            phantom_2: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new1o3::<M, L, L, L>(self.v)
    }
}

impl<MA, LA, LB> Mul<Volume<LB>> for Density<MA, LA>
where
    MA: MassUnit,
    LA: LengthUnit,
    LB: LengthUnit,
{
    type Output = Mass<MA>;

    fn mul(self, other: Volume<LB>) -> Self::Output {
        Mass::<MA>::from(self.v.0 * Volume::<LA>::from(&other).f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{grams_per_centimeter3, kilograms, kilograms_per_meter3, meters3};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_density() {
        let water = kilograms_per_meter3!(1_000);
        println!("{}", water);
        println!("{}", grams_per_centimeter3!(water));
        assert_abs_diff_eq!(
            grams_per_centimeter3!(water),
            grams_per_centimeter3!(1),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            water,
            kilograms_per_meter3!(grams_per_centimeter3!(water)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_density_display() {
        assert_eq!(format!("{}", kilograms_per_meter3!(1.205)), "1.205kg/m^3");
    }

    #[test]
    fn test_density_times_volume() {
        assert_abs_diff_eq!(kilograms_per_meter3!(1_000) * meters3!(2), kilograms!(2_000));
    }
}
