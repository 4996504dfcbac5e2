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

pub trait TimeUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const SECONDS_IN_UNIT: f64;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Time<UnitTime: TimeUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitTime>,
}
supports_absdiffeq!(Time<A>, A: TimeUnit);
supports_cancellation!(Time<A1>, Time<A2>, A1: TimeUnit, A2: TimeUnit);
supports_quantity_ops!(Time<A>, A: TimeUnit);
supports_scalar_ops!(Time<A>, A: TimeUnit);
supports_shift_ops!(Time<A1>, Time<A2>, A1: TimeUnit, A2: TimeUnit);
supports_value_type_conversion!(Time<A>, A: TimeUnit);

impl<T> fmt::Display for Time<T>
where
    T: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", T::UNIT_SUFFIX)
    }
}

impl<'a, TA, TB> From<&'a Time<TA>> for Time<TB>
where
    TA: TimeUnit,
    TB: TimeUnit,
{
    fn from(v: &'a Time<TA>) -> Self {
        Self::from_ordered_float(v.v * TA::SECONDS_IN_UNIT / TB::SECONDS_IN_UNIT)
    }
}

impl<T> Time<T>
where
    T: TimeUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new1o0::<T>(self.v)
    }
}

#[cfg(test)]
mod test {
    use crate::{hours, scalar, seconds};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_time() {
        let h = hours!(1);
        println!("h: {}", h);
        println!("s: {}", seconds!(h));
        assert_abs_diff_eq!(seconds!(h), seconds!(3_600));
    }

    #[test]
    fn test_time_scalar() {
        assert_abs_diff_eq!(seconds!(2) * scalar!(2), seconds!(4));
    }
}
