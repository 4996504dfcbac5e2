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
    supports_shift_ops, supports_value_type_conversion, Diffusivity, DynamicUnits, Length,
    LengthUnit, Time, TimeUnit, Volume,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::{Div, Mul}};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Area<UnitLength: LengthUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitLength>,
}
supports_absdiffeq!(Area<A>, A: LengthUnit);
supports_cancellation!(Area<A1>, Area<A2>, A1: LengthUnit, A2: LengthUnit);
supports_quantity_ops!(Area<A>, A: LengthUnit);
supports_scalar_ops!(Area<A>, A: LengthUnit);
supports_shift_ops!(Area<A1>, Area<A2>, A1: LengthUnit, A2: LengthUnit);
supports_value_type_conversion!(Area<A>, A: LengthUnit);

impl<L> fmt::Display for Area<L>
where
    L: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}^2", L::UNIT_SHORT_NAME)
    }
}

impl<'a, LA, LB> From<&'a Area<LA>> for Area<LB>
where
    LA: LengthUnit,
    LB: LengthUnit,
{
    fn from(v: &'a Area<LA>) -> Self {
        let ratio = LA::METERS_IN_UNIT / LB::METERS_IN_UNIT;
        Self::from_ordered_float(v.v * ratio * ratio)
    }
}

impl<L> Area<L>
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
        DynamicUnits::new2o0::<L, L>(self.v)
    }
}

impl<LA, LB> Mul<Length<LB>> for Area<LA>
where
    LA: LengthUnit,
    LB: LengthUnit,
{
    type Output = Volume<LA>;

    fn mul(self, other: Length<LB>) -> Self::Output {
        Volume::<LA>::from(self.v.0 * Length::<LA>::from(&other).f64())
    }
}

impl<LA, LB> Div<Length<LB>> for Area<LA>
where
    LA: LengthUnit,
    LB: LengthUnit,
{
    type Output = Length<LA>;

    fn div(self, other: Length<LB>) -> Self::Output {
        Length::<LA>::from(self.v.0 / Length::<LA>::from(&other).f64())
    }
}

impl<L, T> Div<Time<T>> for Area<L>
where
    L: LengthUnit,
    T: TimeUnit,
{
    type Output = Diffusivity<L, T>;

    fn div(self, other: Time<T>) -> Self::Output {
        Diffusivity::<L, T>::from(self.v.0 / other.f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{centimeters2, meters, meters2, meters2_per_second, meters3, seconds};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_area() {
        let m2 = meters2!(1);
        println!("m2 : {}", m2);
        println!("cm2: {}", centimeters2!(m2));
        assert_abs_diff_eq!(centimeters2!(m2), centimeters2!(10_000), epsilon = 1e-9);
    }

    #[test]
    fn test_area_ops() {
        assert_abs_diff_eq!(meters2!(6) / meters!(2), meters!(3));
        assert_abs_diff_eq!(meters2!(6) * meters!(2), meters3!(12));
        assert_abs_diff_eq!(meters2!(6) / seconds!(2), meters2_per_second!(3));
    }
}
