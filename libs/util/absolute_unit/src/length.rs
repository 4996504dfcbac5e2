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
    supports_shift_ops, supports_value_type_conversion, Area, DynamicUnits, Unit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

pub trait LengthUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const METERS_IN_UNIT: f64;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Length<UnitLength: LengthUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitLength>,
}
supports_absdiffeq!(Length<A>, A: LengthUnit);
supports_cancellation!(Length<A1>, Length<A2>, A1: LengthUnit, A2: LengthUnit);
supports_quantity_ops!(Length<A>, A: LengthUnit);
supports_scalar_ops!(Length<A>, A: LengthUnit);
supports_shift_ops!(Length<A1>, Length<A2>, A1: LengthUnit, A2: LengthUnit);
supports_value_type_conversion!(Length<A>, A: LengthUnit);

impl<L> fmt::Display for Length<L>
where
    L: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", L::UNIT_SUFFIX)
    }
}

impl<'a, LA, LB> From<&'a Length<LA>> for Length<LB>
where
    LA: LengthUnit,
    LB: LengthUnit,
{
    fn from(v: &'a Length<LA>) -> Self {
        Self::from_ordered_float(v.v * LA::METERS_IN_UNIT / LB::METERS_IN_UNIT)
    }
}

impl<L> Length<L>
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
        DynamicUnits::new1o0::<L>(self.v)
    }
}

impl<LA, LB> Mul<Length<LB>> for Length<LA>
where
    LA: LengthUnit,
    LB: LengthUnit,
{
    type Output = Area<LA>;

    fn mul(self, other: Length<LB>) -> Self::Output {
        Area::<LA>::from(self.v.0 * Length::<LA>::from(&other).f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{centimeters, kilometers, meters, meters2, scalar};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meters_to_kilometers() {
        let m = meters!(1_500);
        println!("m : {}", m);
        println!("km: {}", kilometers!(m));
        assert_abs_diff_eq!(kilometers!(m), kilometers!(1.5));
    }

    #[test]
    fn test_length_shift() {
        let cm = centimeters!(1) + meters!(1);
        assert_abs_diff_eq!(cm, centimeters!(101), epsilon = 1e-9);
    }

    #[test]
    fn test_length_scalar() {
        assert_abs_diff_eq!(meters!(2) * scalar!(3), meters!(6));
        assert_abs_diff_eq!(-meters!(2), meters!(-2));
    }

    #[test]
    fn test_length_product() {
        assert_abs_diff_eq!(meters!(2) * centimeters!(50), meters2!(1), epsilon = 1e-12);
        assert_abs_diff_eq!(2., meters!(2) / centimeters!(100), epsilon = 1e-12);
    }
}
