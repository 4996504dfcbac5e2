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
    supports_shift_ops, supports_value_type_conversion, DynamicUnits, Force, ForceUnit, Length,
    LengthUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Mul};

/// force / length, equivalently energy per unit area of interface
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct SurfaceTension<UnitForce: ForceUnit, UnitLength: LengthUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitForce>,
    phantom_2: PhantomData<UnitLength>,
}
supports_absdiffeq!(SurfaceTension<A, B>, A: ForceUnit, B: LengthUnit);
supports_cancellation!(
    SurfaceTension<A1, B1>,
    SurfaceTension<A2, B2>,
    A1: ForceUnit,
    B1: LengthUnit,
    A2: ForceUnit,
    B2: LengthUnit,
);
supports_quantity_ops!(SurfaceTension<A, B>, A: ForceUnit, B: LengthUnit);
supports_scalar_ops!(SurfaceTension<A, B>, A: ForceUnit, B: LengthUnit);
supports_shift_ops!(
    SurfaceTension<A1, B1>,
    SurfaceTension<A2, B2>,
    A1: ForceUnit,
    B1: LengthUnit,
    A2: ForceUnit,
    B2: LengthUnit,
);
supports_value_type_conversion!(SurfaceTension<A, B>, A: ForceUnit, B: LengthUnit);

impl<F, L> fmt::Display for SurfaceTension<F, L>
where
    F: ForceUnit,
    L: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}", F::UNIT_SHORT_NAME, L::UNIT_SHORT_NAME)
    }
}

impl<'a, FA, LA, FB, LB> From<&'a SurfaceTension<FA, LA>> for SurfaceTension<FB, LB>
where
    FA: ForceUnit,
    LA: LengthUnit,
    FB: ForceUnit,
    LB: LengthUnit,
{
    fn from(v: &'a SurfaceTension<FA, LA>) -> Self {
        let force_ratio = FA::NEWTONS_IN_UNIT / FB::NEWTONS_IN_UNIT;
        let length_ratio = LB::METERS_IN_UNIT / LA::METERS_IN_UNIT;
        Self::from_ordered_float(v.v * force_ratio * length_ratio)
    }
}

impl<F, L> SurfaceTension<F, L>
where
    F: ForceUnit,
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
        DynamicUnits::new2o2::<F::UnitMass, F::UnitLength, F::UnitTime, F::UnitTime>(self.v)
            .per::<L>()
    }
}

impl<FA, LA, LB> Mul<Length<LB>> for SurfaceTension<FA, LA>
where
    FA: ForceUnit,
    LA: LengthUnit,
    LB: LengthUnit,
{
    type Output = Force<FA>;

    fn mul(self, other: Length<LB>) -> Self::Output {
        Force::<FA>::from(self.v.0 * Length::<LA>::from(&other).f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{dynes_per_centimeter, meters, newtons, newtons_per_meter, Dimension};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_surface_tension() {
        let sigma = newtons_per_meter!(0.073);
        println!("{}", sigma);
        println!("{}", dynes_per_centimeter!(sigma));
        assert_abs_diff_eq!(
            dynes_per_centimeter!(sigma),
            dynes_per_centimeter!(73),
            epsilon = 1e-9
        );
        assert_eq!(sigma.dimension(), Dimension::SURFACE_TENSION);
    }

    #[test]
    fn test_surface_tension_times_length() {
        assert_abs_diff_eq!(newtons_per_meter!(0.073) * meters!(2), newtons!(0.146));
    }
}
