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
    supports_shift_ops, supports_value_type_conversion, AmountUnit, DynamicUnits, EnergyUnit,
    MassUnit, MolarMass, SpecificGasConstant, TemperatureUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, fmt::Debug, marker::PhantomData, ops::Div};

/// energy / amount of substance / temperature, e.g. the universal gas constant
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct MolarGasConstant<
    UnitEnergy: EnergyUnit,
    UnitAmount: AmountUnit,
    UnitTemperature: TemperatureUnit,
> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<UnitEnergy>,
    phantom_2: PhantomData<UnitAmount>,
    phantom_3: PhantomData<UnitTemperature>,
}
supports_absdiffeq!(MolarGasConstant<A, B, C>, A: EnergyUnit, B: AmountUnit, C: TemperatureUnit);
supports_cancellation!(
    MolarGasConstant<A1, B1, C1>,
    MolarGasConstant<A2, B2, C2>,
    A1: EnergyUnit,
    B1: AmountUnit,
    C1: TemperatureUnit,
    A2: EnergyUnit,
    B2: AmountUnit,
    C2: TemperatureUnit,
);
supports_quantity_ops!(MolarGasConstant<A, B, C>, A: EnergyUnit, B: AmountUnit, C: TemperatureUnit);
supports_scalar_ops!(MolarGasConstant<A, B, C>, A: EnergyUnit, B: AmountUnit, C: TemperatureUnit);
supports_shift_ops!(
    MolarGasConstant<A1, B1, C1>,
    MolarGasConstant<A2, B2, C2>,
    A1: EnergyUnit,
    B1: AmountUnit,
    C1: TemperatureUnit,
    A2: EnergyUnit,
    B2: AmountUnit,
    C2: TemperatureUnit,
);
supports_value_type_conversion!(
    MolarGasConstant<A, B, C>,
    A: EnergyUnit,
    B: AmountUnit,
    C: TemperatureUnit,
);

impl<E, N, K> fmt::Display for MolarGasConstant<E, N, K>
where
    E: EnergyUnit,
    N: AmountUnit,
    K: TemperatureUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(
            f,
            "{}/({} {})",
            E::UNIT_SHORT_NAME,
            N::UNIT_SHORT_NAME,
            K::UNIT_SHORT_NAME
        )
    }
}

impl<'a, EA, NA, KA, EB, NB, KB> From<&'a MolarGasConstant<EA, NA, KA>>
    for MolarGasConstant<EB, NB, KB>
where
    EA: EnergyUnit,
    NA: AmountUnit,
    KA: TemperatureUnit,
    EB: EnergyUnit,
    NB: AmountUnit,
    KB: TemperatureUnit,
{
    fn from(v: &'a MolarGasConstant<EA, NA, KA>) -> Self {
        let energy_ratio = EA::JOULES_IN_UNIT / EB::JOULES_IN_UNIT;
        let amount_ratio = NB::MOLES_IN_UNIT / NA::MOLES_IN_UNIT;
        let temperature_ratio = KB::KELVIN_IN_DEGREE / KA::KELVIN_IN_DEGREE;
        Self::from_ordered_float(v.v * energy_ratio * amount_ratio * temperature_ratio)
    }
}

impl<E, N, K> MolarGasConstant<E, N, K>
where
    E: EnergyUnit,
    N: AmountUnit,
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
        .per::<N>()
        .per::<K>()
    }
}

/// Dividing a molar quantity by a molar mass gives the per-mass quantity: R / M = R_specific.
impl<E, NA, K, M, NB> Div<MolarMass<M, NB>> for MolarGasConstant<E, NA, K>
where
    E: EnergyUnit,
    NA: AmountUnit,
    K: TemperatureUnit,
    M: MassUnit,
    NB: AmountUnit,
{
    type Output = SpecificGasConstant<E, E::UnitMass, K>;

    fn div(self, other: MolarMass<M, NB>) -> Self::Output {
        let molar_mass = MolarMass::<E::UnitMass, NA>::from(&other);
        Self::Output::from(self.v.0 / molar_mass.f64())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        calories_per_mole_kelvin, grams_per_mole, joules_per_kilogram_kelvin,
        joules_per_mole_kelvin, kilograms_per_mole, Dimension, Joules, Kelvin, Kilomoles,
        MolarGasConstant,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gas_constant_units() {
        let r = joules_per_mole_kelvin!(8.314);
        println!("{}", r);
        println!("{}", calories_per_mole_kelvin!(r));
        assert_abs_diff_eq!(calories_per_mole_kelvin!(r).f64(), 1.987_093, epsilon = 1e-6);
        let per_kmol = MolarGasConstant::<Joules, Kilomoles, Kelvin>::from(&r);
        assert_abs_diff_eq!(per_kmol.f64(), 8_314., epsilon = 1e-9);
    }

    #[test]
    fn test_gas_constant_dimension() {
        let r = joules_per_mole_kelvin!(8.314);
        assert_eq!(r.dimension(), Dimension::MOLAR_GAS_CONSTANT);
        assert_eq!(format!("{}", r), "8.314J/(mol K)");
    }

    #[test]
    fn test_specific_gas_constant() {
        let r = joules_per_mole_kelvin!(8.314);
        let r_v = r / kilograms_per_mole!(0.018);
        assert_abs_diff_eq!(r_v, joules_per_kilogram_kelvin!(461.888_9), epsilon = 1e-4);
        // The molar mass is converted before dividing.
        let r_v2 = r / grams_per_mole!(18);
        assert_abs_diff_eq!(r_v, r_v2, epsilon = 1e-9);
    }
}
