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
    supports_shift_ops, supports_value_type_conversion, DynamicUnits, EnergyUnit, MassUnit,
    TemperatureUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData};

/// energy / mass / temperature, e.g. the gas constant of a single species
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct SpecificGasConstant<
    UnitEnergy: EnergyUnit,
    UnitMass: MassUnit,
    UnitTemperature: TemperatureUnit,
> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitEnergy>,
    phantom_2: PhantomData<UnitMass>,
    phantom_3: PhantomData<UnitTemperature>,
}
supports_absdiffeq!(SpecificGasConstant<A, B, C>, A: EnergyUnit, B: MassUnit, C: TemperatureUnit);
supports_cancellation!(
    SpecificGasConstant<A1, B1, C1>,
    SpecificGasConstant<A2, B2, C2>,
    A1: EnergyUnit,
    B1: MassUnit,
    C1: TemperatureUnit,
    A2: EnergyUnit,
    B2: MassUnit,
    C2: TemperatureUnit,
);
supports_quantity_ops!(
    SpecificGasConstant<A, B, C>,
    A: EnergyUnit,
    B: MassUnit,
    C: TemperatureUnit,
);
supports_scalar_ops!(SpecificGasConstant<A, B, C>, A: EnergyUnit, B: MassUnit, C: TemperatureUnit);
supports_shift_ops!(
    SpecificGasConstant<A1, B1, C1>,
    SpecificGasConstant<A2, B2, C2>,
    A1: EnergyUnit,
    B1: MassUnit,
    C1: TemperatureUnit,
    A2: EnergyUnit,
    B2: MassUnit,
    C2: TemperatureUnit,
);
supports_value_type_conversion!(
    SpecificGasConstant<A, B, C>,
    A: EnergyUnit,
    B: MassUnit,
    C: TemperatureUnit,
);

impl<E, M, K> fmt::Display for SpecificGasConstant<E, M, K>
where
    E: EnergyUnit,
    M: MassUnit,
    K: TemperatureUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(
            f,
            "{}/({} {})",
            E::UNIT_SHORT_NAME,
            M::UNIT_SHORT_NAME,
            K::UNIT_SHORT_NAME
        )
    }
}

impl<'a, EA, MA, KA, EB, MB, KB> From<&'a SpecificGasConstant<EA, MA, KA>>
    for SpecificGasConstant<EB, MB, KB>
where
    EA: EnergyUnit,
    MA: MassUnit,
    KA: TemperatureUnit,
    EB: EnergyUnit,
    MB: MassUnit,
    KB: TemperatureUnit,
{
    fn from(v: &'a SpecificGasConstant<EA, MA, KA>) -> Self {
        let energy_ratio = EA::JOULES_IN_UNIT / EB::JOULES_IN_UNIT;
        let mass_ratio = MB::GRAMS_IN_UNIT / MA::GRAMS_IN_UNIT;
        let temperature_ratio = KB::KELVIN_IN_DEGREE / KA::KELVIN_IN_DEGREE;
        Self::from_ordered_float(v.v * energy_ratio * mass_ratio * temperature_ratio)
    }
}

impl<E, M, K> SpecificGasConstant<E, M, K>
where
    E: EnergyUnit,
    M: MassUnit,
    K: TemperatureUnit,
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
        DynamicUnits::new3o2::<
            E::UnitMass,
            E::UnitLength,
            E::UnitLength,
            E::UnitTime,
            E::UnitTime,
        >(self.v)
        .per::<M>()
        .per::<K>()
    }
}

#[cfg(test)]
mod test {
    use crate::{joules_per_kilogram_kelvin, Dimension, Grams, Joules, Kelvin, SpecificGasConstant};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_specific_gas_constant() {
        let r_d = joules_per_kilogram_kelvin!(287.05);
        let per_gram = SpecificGasConstant::<Joules, Grams, Kelvin>::from(&r_d);
        assert_abs_diff_eq!(per_gram.f64(), 0.287_05, epsilon = 1e-12);
        assert_eq!(r_d.dimension(), Dimension::SPECIFIC_GAS_CONSTANT);
    }
}
