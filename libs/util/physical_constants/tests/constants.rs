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
use absolute_unit::Dimension;
use anyhow::Result;
use physical_constants::{
    ConstantId, AIR_DYNAMIC_VISCOSITY, AIR_VISCOSITY, CONSTANTS, GAS_CONSTANT, GRAVITY, RHO_AIR,
    SIGMA_WATER_AIR, VAPOR_DIFFUSIVITY, WATER_DENSITY, WATER_VAPOR_MOLAR_MASS,
};
use rayon::prelude::*;

fn snapshot() -> Vec<(ConstantId, u64, Option<Dimension>)> {
    CONSTANTS
        .iter()
        .map(|c| (c.id(), c.magnitude().to_bits(), c.dimension()))
        .collect()
}

#[test]
fn test_values_match_their_literals() {
    assert_eq!(GAS_CONSTANT.f64().to_bits(), 8.314f64.to_bits());
    assert_eq!(WATER_VAPOR_MOLAR_MASS.f64().to_bits(), 0.018f64.to_bits());
    assert_eq!(WATER_DENSITY.f64().to_bits(), 1000f64.to_bits());
    assert_eq!(AIR_DYNAMIC_VISCOSITY.f64().to_bits(), 1.8e-5f64.to_bits());
    assert_eq!(VAPOR_DIFFUSIVITY.f64().to_bits(), 2.5e-5f64.to_bits());
    assert_eq!(SIGMA_WATER_AIR.to_bits(), 0.073f64.to_bits());
    assert_eq!(GRAVITY.to_bits(), 9.81f64.to_bits());
    assert_eq!(RHO_AIR.to_bits(), 1.205f64.to_bits());
    assert_eq!(AIR_VISCOSITY.to_bits(), 1.81e-5f64.to_bits());
}

#[test]
fn test_table_mirrors_items() {
    let expect = [
        (ConstantId::GasConstant, 8.314),
        (ConstantId::WaterVaporMolarMass, 0.018),
        (ConstantId::WaterDensity, 1000.),
        (ConstantId::AirDynamicViscosity, 1.8e-5),
        (ConstantId::VaporDiffusivity, 2.5e-5),
        (ConstantId::SigmaWaterAir, 0.073),
        (ConstantId::Gravity, 9.81),
        (ConstantId::RhoAir, 1.205),
        (ConstantId::AirViscosity, 1.81e-5),
    ];
    for (id, value) in expect {
        assert_eq!(CONSTANTS.get(id).magnitude().to_bits(), f64::to_bits(value));
    }
}

#[test]
fn test_reads_are_stable() {
    let first = snapshot();
    let again = snapshot();
    assert_eq!(first, again);
    assert_eq!(GAS_CONSTANT.f64(), GAS_CONSTANT.f64());
}

#[test]
fn test_viscosity_entries_are_distinct() {
    let dimensioned = CONSTANTS.get(ConstantId::AirDynamicViscosity);
    let bare = CONSTANTS.get(ConstantId::AirViscosity);
    assert_ne!(dimensioned.magnitude(), bare.magnitude());
    assert_eq!(dimensioned.unit(), bare.unit());
    assert!(dimensioned.is_dimensioned());
    assert!(!bare.is_dimensioned());
    assert!(CONSTANTS.viscosity_drift() > 0.005);
}

#[test]
fn test_dimensions() {
    let expect = [
        (ConstantId::GasConstant, Dimension::MOLAR_GAS_CONSTANT),
        (ConstantId::WaterVaporMolarMass, Dimension::MOLAR_MASS),
        (ConstantId::WaterDensity, Dimension::DENSITY),
        (ConstantId::AirDynamicViscosity, Dimension::DYNAMIC_VISCOSITY),
        (ConstantId::VaporDiffusivity, Dimension::DIFFUSIVITY),
    ];
    for (id, dimension) in expect {
        assert_eq!(CONSTANTS.get(id).dimension(), Some(dimension));
    }
    for c in CONSTANTS.bare() {
        assert_eq!(c.dimension(), None);
    }
    assert_eq!(
        Dimension::MOLAR_GAS_CONSTANT.to_string(),
        "kg m^2 s^-2 K^-1 mol^-1"
    );
    assert_eq!(Dimension::DIFFUSIVITY.to_string(), "m^2 s^-1");
}

#[test]
fn test_concurrent_reads() {
    let expect = snapshot();
    let seen = (0..64)
        .into_par_iter()
        .map(|_| snapshot())
        .collect::<Vec<_>>();
    for s in seen {
        assert_eq!(s, expect);
    }
}

#[test]
fn test_lookup_by_name() -> Result<()> {
    assert_eq!(CONSTANTS.lookup("water_density")?.magnitude(), 1000.);
    assert_eq!(CONSTANTS.lookup("RHO-AIR")?.id(), ConstantId::RhoAir);
    Ok(())
}

#[test]
fn test_unknown_name_fails() {
    let err = CONSTANTS.lookup("boltzmann").unwrap_err();
    assert!(err.to_string().starts_with("unknown physical constant: boltzmann"));
    assert!(CONSTANTS.lookup("").is_err());
}
