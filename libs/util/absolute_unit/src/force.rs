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
    supports_shift_ops, supports_value_type_conversion, Acceleration, DynamicUnits, Length,
    LengthUnit, Mass, MassUnit, SurfaceTension, TimeUnit, Unit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Div};

pub trait ForceUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const NEWTONS_IN_UNIT: f64;

    type UnitMass: MassUnit;
    type UnitLength: LengthUnit;
    type UnitTime: TimeUnit;
}

/// mass * length / time / time
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Force<UnitForce: ForceUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitForce>,
}
supports_absdiffeq!(Force<A>, A: ForceUnit);
supports_cancellation!(Force<A1>, Force<A2>, A1: ForceUnit, A2: ForceUnit);
supports_quantity_ops!(Force<A>, A: ForceUnit);
supports_scalar_ops!(Force<A>, A: ForceUnit);
supports_shift_ops!(Force<A1>, Force<A2>, A1: ForceUnit, A2: ForceUnit);
supports_value_type_conversion!(Force<A>, A: ForceUnit);

impl<F> fmt::Display for Force<F>
where
    F: ForceUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", F::UNIT_SHORT_NAME)
    }
}

impl<'a, FA, FB> From<&'a Force<FA>> for Force<FB>
where
    FA: ForceUnit,
    FB: ForceUnit,
{
    fn from(v: &'a Force<FA>) -> Self {
        Self::from_ordered_float(v.v * FA::NEWTONS_IN_UNIT / FB::NEWTONS_IN_UNIT)
    }
}

impl<F> Force<F>
where
    F: ForceUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new2o2::<F::UnitMass, F::UnitLength, F::UnitTime, F::UnitTime>(self.v)
    }
}

impl<F, M> Div<Mass<M>> for Force<F>
where
    F: ForceUnit, // kg*m/s^2
    M: MassUnit,
{
    type Output = Acceleration<F::UnitLength, F::UnitTime>;

    fn div(self, rhs: Mass<M>) -> Self::Output {
        let mass = Mass::<F::UnitMass>::from(&rhs);
        Self::Output::from(self.v.0 / mass.f64())
    }
}

impl<F, L> Div<Length<L>> for Force<F>
where
    F: ForceUnit,
    L: LengthUnit,
{
    type Output = SurfaceTension<F, L>;

    fn div(self, rhs: Length<L>) -> Self::Output {
        Self::Output::from(self.v.0 / rhs.f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{dynes, kilograms, meters, meters_per_second2, newtons, newtons_per_meter, scalar};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_force() {
        let n = newtons!(1);
        println!("N  : {}", n);
        println!("dyn: {}", dynes!(n));
        assert_abs_diff_eq!(dynes!(n), dynes!(100_000), epsilon = 1e-9);
    }

    #[test]
    fn test_force_scalar() {
        assert_abs_diff_eq!(newtons!(2) * scalar!(2), newtons!(4));
    }

    #[test]
    fn test_force_to_acceleration() {
        let weight = newtons!(9.81);
        assert_abs_diff_eq!(weight / kilograms!(1), meters_per_second2!(9.81));
    }

    #[test]
    fn test_force_per_length() {
        assert_abs_diff_eq!(newtons!(0.146) / meters!(2), newtons_per_meter!(0.073));
    }
}
