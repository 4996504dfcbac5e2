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
    supports_shift_ops, supports_value_type_conversion, Area, DynamicUnits, LengthUnit, Time,
    TimeUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

/// length^2 / time
///
/// Mass and vapor diffusivities, thermal diffusivity, and kinematic viscosity all share this
/// shape.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Diffusivity<UnitLength: LengthUnit, UnitTime: TimeUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitLength>,
    phantom_2: PhantomData<UnitTime>,
}
supports_absdiffeq!(Diffusivity<A, B>, A: LengthUnit, B: TimeUnit);
supports_cancellation!(
    Diffusivity<A1, B1>,
    Diffusivity<A2, B2>,
    A1: LengthUnit,
    B1: TimeUnit,
    A2: LengthUnit,
    B2: TimeUnit,
);
supports_quantity_ops!(Diffusivity<A, B>, A: LengthUnit, B: TimeUnit);
supports_scalar_ops!(Diffusivity<A, B>, A: LengthUnit, B: TimeUnit);
supports_shift_ops!(
    Diffusivity<A1, B1>,
    Diffusivity<A2, B2>,
    A1: LengthUnit,
    B1: TimeUnit,
    A2: LengthUnit,
    B2: TimeUnit,
);
supports_value_type_conversion!(Diffusivity<A, B>, A: LengthUnit, B: TimeUnit);

impl<L, T> fmt::Display for Diffusivity<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}^2/{}", L::UNIT_SHORT_NAME, T::UNIT_SHORT_NAME)
    }
}

impl<'a, LA, TA, LB, TB> From<&'a Diffusivity<LA, TA>> for Diffusivity<LB, TB>
where
    LA: LengthUnit,
    TA: TimeUnit,
    LB: LengthUnit,
    TB: TimeUnit,
{
    fn from(v: &'a Diffusivity<LA, TA>) -> Self {
        let length_ratio = LA::METERS_IN_UNIT / LB::METERS_IN_UNIT;
        let time_ratio = TB::SECONDS_IN_UNIT / TA::SECONDS_IN_UNIT;
        Self::from_ordered_float(v.v * length_ratio * length_ratio * time_ratio)
    }
}

impl<L, T> Diffusivity<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
            phantom_2: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new2o1::<L, L, T>(self.v)
    }
}

impl<LA, TA, TB> Mul<Time<TB>> for Diffusivity<LA, TA>
where
    LA: LengthUnit,
    TA: TimeUnit,
    TB: TimeUnit,
{
    type Output = Area<LA>;

    fn mul(self, other: Time<TB>) -> Self::Output {
        Area::<LA>::from(self.v.0 * Time::<TA>::from(&other).f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{centimeters2_per_second, meters2, meters2_per_second, seconds};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_diffusivity() {
        let d = meters2_per_second!(2.5e-5);
        println!("{}", d);
        println!("{}", centimeters2_per_second!(d));
        assert_abs_diff_eq!(
            centimeters2_per_second!(d),
            centimeters2_per_second!(0.25),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_diffusivity_over_time() {
        assert_abs_diff_eq!(
            meters2_per_second!(2.5e-5) * seconds!(4),
            meters2!(1e-4),
            epsilon = 1e-18
        );
    }
}
