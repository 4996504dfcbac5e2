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
    supports_shift_ops, supports_value_type_conversion, DynamicUnits, LengthUnit, MassUnit,
    TimeUnit, Unit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData};

pub trait EnergyUnit: Unit + Copy + Debug + Eq + PartialEq + 'static {
    const JOULES_IN_UNIT: f64;

    type UnitMass: MassUnit;
    type UnitLength: LengthUnit;
    type UnitTime: TimeUnit;
}

/// mass * length^2 / time^2
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Energy<UnitEnergy: EnergyUnit> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitEnergy>,
}
supports_absdiffeq!(Energy<A>, A: EnergyUnit);
supports_cancellation!(Energy<A1>, Energy<A2>, A1: EnergyUnit, A2: EnergyUnit);
supports_quantity_ops!(Energy<A>, A: EnergyUnit);
supports_scalar_ops!(Energy<A>, A: EnergyUnit);
supports_shift_ops!(Energy<A1>, Energy<A2>, A1: EnergyUnit, A2: EnergyUnit);
supports_value_type_conversion!(Energy<A>, A: EnergyUnit);

impl<E> fmt::Display for Energy<E>
where
    E: EnergyUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", E::UNIT_SHORT_NAME)
    }
}

impl<'a, EA, EB> From<&'a Energy<EA>> for Energy<EB>
where
    EA: EnergyUnit,
    EB: EnergyUnit,
{
    fn from(v: &'a Energy<EA>) -> Self {
        Self::from_ordered_float(v.v * EA::JOULES_IN_UNIT / EB::JOULES_IN_UNIT)
    }
}

impl<E> Energy<E>
where
    E: EnergyUnit,
{
    pub(crate) const fn from_ordered_float(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            phantom_1: PhantomData,
        }
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new3o2::<
            E::UnitMass,
            E::UnitLength,
            E::UnitLength,
            E::UnitTime,
            E::UnitTime,
        >(self.v)
    }
}

#[cfg(test)]
mod test {
    use crate::{calories, joules, Dimension};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_energy() {
        let cal = calories!(1);
        assert_abs_diff_eq!(joules!(cal), joules!(4.184));
        assert_eq!(cal.dimension(), Dimension::ENERGY);
    }
}
