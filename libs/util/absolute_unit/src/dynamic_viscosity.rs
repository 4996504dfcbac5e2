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
    supports_shift_ops, supports_value_type_conversion, Density, Diffusivity, DynamicUnits,
    LengthUnit, MassUnit, TimeUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Div};

/// mass / length / time
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct DynamicViscosity<UnitMass: MassUnit, UnitLength: LengthUnit, UnitTime: TimeUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitMass>,
    phantom_2: PhantomData<UnitLength>,
    phantom_3: PhantomData<UnitTime>,
}
supports_absdiffeq!(DynamicViscosity<A, B, C>, A: MassUnit, B: LengthUnit, C: TimeUnit);
supports_cancellation!(
    DynamicViscosity<A1, B1, C1>,
    DynamicViscosity<A2, B2, C2>,
    A1: MassUnit,
    B1: LengthUnit,
    C1: TimeUnit,
    A2: MassUnit,
    B2: LengthUnit,
    C2: TimeUnit,
);
supports_quantity_ops!(DynamicViscosity<A, B, C>, A: MassUnit, B: LengthUnit, C: TimeUnit);
supports_scalar_ops!(DynamicViscosity<A, B, C>, A: MassUnit, B: LengthUnit, C: TimeUnit);
supports_shift_ops!(
    DynamicViscosity<A1, B1, C1>,
    DynamicViscosity<A2, B2, C2>,
    A1: MassUnit,
    B1: LengthUnit,
    C1: TimeUnit,
    A2: MassUnit,
    B2: LengthUnit,
    C2: TimeUnit,
);
supports_value_type_conversion!(DynamicViscosity<A, B, C>, A: MassUnit, B: LengthUnit, C: TimeUnit);

impl<M, L, T> fmt::Display for DynamicViscosity<M, L, T>
where
    M: MassUnit,
    L: LengthUnit,
    T: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(
            f,
            "{}/({} {})",
            M::UNIT_SHORT_NAME,
            L::UNIT_SHORT_NAME,
            T::UNIT_SHORT_NAME
        )
    }
}

impl<'a, MA, LA, TA, MB, LB, TB> From<&'a DynamicViscosity<MA, LA, TA>>
    for DynamicViscosity<MB, LB, TB>
where
    MA: MassUnit,
    LA: LengthUnit,
    TA: TimeUnit,
    MB: MassUnit,
    LB: LengthUnit,
    TB: TimeUnit,
{
    fn from(v: &'a DynamicViscosity<MA, LA, TA>) -> Self {
        let mass_ratio = MA::GRAMS_IN_UNIT / MB::GRAMS_IN_UNIT;
        let length_ratio = LB::METERS_IN_UNIT / LA::METERS_IN_UNIT;
        let time_ratio = TB::SECONDS_IN_UNIT / TA::SECONDS_IN_UNIT;
        Self::from_ordered_float(v.v * mass_ratio * length_ratio * time_ratio)
    }
}

impl<M, L, T> DynamicViscosity<M, L, T>
where
    M: MassUnit,
    L: LengthUnit,
    T: TimeUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
            phantom_2: PhantomData,
            phantom_3: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new1o2::<M, L, T>(self.v)
    }
}

/// Dynamic viscosity over density is the kinematic viscosity, which has the units of a
/// diffusivity.
impl<MA, LA, TA, MB, LB> Div<Density<MB, LB>> for DynamicViscosity<MA, LA, TA>
where
    MA: MassUnit,
    LA: LengthUnit,
    TA: TimeUnit,
    MB: MassUnit,
    LB: LengthUnit,
{
    type Output = Diffusivity<LA, TA>;

    fn div(self, other: Density<MB, LB>) -> Self::Output {
        let density = Density::<MA, LA>::from(&other);
        Self::Output::from(self.v.0 / density.f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        grams_per_centimeter3, kilograms_per_meter3, kilograms_per_meter_second,
        meters2_per_second, poise, Dimension,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_viscosity_to_poise() {
        let eta = kilograms_per_meter_second!(1.8e-5);
        println!("{}", eta);
        println!("{}", poise!(eta));
        assert_abs_diff_eq!(poise!(eta), poise!(1.8e-4), epsilon = 1e-15);
        assert_eq!(eta.dimension(), Dimension::DYNAMIC_VISCOSITY);
    }

    #[test]
    fn test_kinematic_viscosity() {
        let eta = kilograms_per_meter_second!(1.8e-5);
        let nu = eta / kilograms_per_meter3!(1.2);
        assert_abs_diff_eq!(nu, meters2_per_second!(1.5e-5), epsilon = 1e-15);
        let nu_cgs = eta / grams_per_centimeter3!(0.0012);
        assert_abs_diff_eq!(nu, nu_cgs, epsilon = 1e-15);
    }

    #[test]
    fn test_viscosity_ratio() {
        let a = kilograms_per_meter_second!(1.8e-5);
        let b = kilograms_per_meter_second!(1.81e-5);
        assert!(a / b < 1.);
        assert_abs_diff_eq!(a / poise!(a), 1., epsilon = 1e-12);
    }
}
