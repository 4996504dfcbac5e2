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
    supports_shift_ops, supports_value_type_conversion, DynamicUnits, LengthUnit, Time, TimeUnit,
    Velocity,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Acceleration<UnitLength: LengthUnit, UnitTime: TimeUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitLength>,
    phantom_2: PhantomData<UnitTime>,
}
supports_absdiffeq!(Acceleration<A, B>, A: LengthUnit, B: TimeUnit);
supports_cancellation!(
    Acceleration<A1, B1>,
    Acceleration<A2, B2>,
    A1: LengthUnit,
    B1: TimeUnit,
    A2: LengthUnit,
    B2: TimeUnit,
);
supports_quantity_ops!(Acceleration<A, B>, A: LengthUnit, B: TimeUnit);
supports_scalar_ops!(Acceleration<A, B>, A: LengthUnit, B: TimeUnit);
supports_shift_ops!(
    Acceleration<A1, B1>,
    Acceleration<A2, B2>,
    A1: LengthUnit,
    B1: TimeUnit,
    A2: LengthUnit,
    B2: TimeUnit,
);
supports_value_type_conversion!(Acceleration<A, B>, A: LengthUnit, B: TimeUnit);

impl<L, T> fmt::Display for Acceleration<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}^2", L::UNIT_SHORT_NAME, T::UNIT_SHORT_NAME)
    }
}

impl<'a, LA, TA, LB, TB> From<&'a Acceleration<LA, TA>> for Acceleration<LB, TB>
where
    LA: LengthUnit,
    TA: TimeUnit,
    LB: LengthUnit,
    TB: TimeUnit,
{
    fn from(v: &'a Acceleration<LA, TA>) -> Self {
        let length_ratio = LA::METERS_IN_UNIT / LB::METERS_IN_UNIT;
        let time_ratio = TB::SECONDS_IN_UNIT / TA::SECONDS_IN_UNIT;
        Self::from_ordered_float(v.v * length_ratio * time_ratio * time_ratio)
    }
}

impl<L, T> Acceleration<L, T>
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
        DynamicUnits::new1o2::<L, T, T>(self.v)
    }
}

impl<LA, TA, TB> Mul<Time<TB>> for Acceleration<LA, TA>
where
    LA: LengthUnit,
    TA: TimeUnit,
    TB: TimeUnit,
{
    type Output = Velocity<LA, TA>;

    fn mul(self, other: Time<TB>) -> Self::Output {
        Velocity::<LA, TA>::from(self.v.0 * Time::<TA>::from(&other).f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{meters_per_second, meters_per_second2, seconds, Acceleration, Centimeters, Seconds};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_acceleration() {
        let g = meters_per_second2!(9.81);
        let g_cm = Acceleration::<Centimeters, Seconds>::from(&g);
        assert_abs_diff_eq!(g_cm.f64(), 981., epsilon = 1e-9);
        assert_abs_diff_eq!(g * seconds!(2), meters_per_second!(19.62));
    }
}
