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
    AIR_DYNAMIC_VISCOSITY, GAS_CONSTANT, GRAVITY, RHO_AIR, SIGMA_WATER_AIR,
    WATER_VAPOR_MOLAR_MASS,
};
use absolute_unit::{
    kilograms_per_meter3, meters_per_second2, newtons_per_meter, Acceleration, Density,
    Diffusivity, Joules, Kelvin, Kilograms, Meters, Newtons, Seconds, SpecificGasConstant,
    SurfaceTension,
};

/// R / M_v: the gas constant of water vapor, about 461.9 J/(kg K).
pub fn water_vapor_gas_constant() -> SpecificGasConstant<Joules, Kilograms, Kelvin> {
    *GAS_CONSTANT / *WATER_VAPOR_MOLAR_MASS
}

pub fn air_density() -> Density<Kilograms, Meters> {
    kilograms_per_meter3!(RHO_AIR)
}

/// Dynamic viscosity of air over its density.
pub fn air_kinematic_viscosity() -> Diffusivity<Meters, Seconds> {
    *AIR_DYNAMIC_VISCOSITY / air_density()
}

pub fn standard_gravity() -> Acceleration<Meters, Seconds> {
    meters_per_second2!(GRAVITY)
}

pub fn water_air_surface_tension() -> SurfaceTension<Newtons, Meters> {
    newtons_per_meter!(SIGMA_WATER_AIR)
}

#[cfg(test)]
mod test {
    use super::*;
    use absolute_unit::{dynes_per_centimeter, Dimension};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_water_vapor_gas_constant() {
        let r_v = water_vapor_gas_constant();
        assert_abs_diff_eq!(r_v.f64(), 8.314 / 0.018, epsilon = 1e-9);
        assert_abs_diff_eq!(r_v.f64(), 461.888_888, epsilon = 1e-5);
        assert_eq!(r_v.dimension(), Dimension::SPECIFIC_GAS_CONSTANT);
    }

    #[test]
    fn test_air_kinematic_viscosity() {
        let nu = air_kinematic_viscosity();
        assert_abs_diff_eq!(nu.f64(), 1.8e-5 / 1.205, epsilon = 1e-15);
        assert_eq!(nu.dimension(), Dimension::DIFFUSIVITY);
    }

    #[test]
    fn test_promoted_bare_values() {
        assert_eq!(standard_gravity().f64().to_bits(), GRAVITY.to_bits());
        assert_eq!(standard_gravity().dimension(), Dimension::ACCELERATION);
        assert_eq!(air_density().f64().to_bits(), RHO_AIR.to_bits());
        assert_eq!(air_density().dimension(), Dimension::DENSITY);

        let sigma = water_air_surface_tension();
        assert_eq!(sigma.dimension(), Dimension::SURFACE_TENSION);
        assert_abs_diff_eq!(dynes_per_centimeter!(sigma).f64(), 73., epsilon = 1e-9);
    }
}
