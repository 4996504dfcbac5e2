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

//! Physical constants for the rain model.
//!
//! Two kinds of values live here. Bare scalars are plain `f64` constants whose unit is only
//! documented; reading them never touches the unit system. Dimensioned constants carry their
//! units in their type and are built once, on first access.
mod derived;
mod table;

pub use derived::{
    air_density, air_kinematic_viscosity, standard_gravity, water_air_surface_tension,
    water_vapor_gas_constant,
};
pub use table::{Constant, ConstantId, ConstantsTable, CONSTANTS};

use absolute_unit::{
    joules_per_mole_kelvin, kilograms_per_meter3, kilograms_per_meter_second, kilograms_per_mole,
    meters2_per_second, Density, Diffusivity, DynamicViscosity, Joules, Kelvin, Kilograms, Meters,
    MolarGasConstant, MolarMass, Moles, Seconds,
};
use once_cell::sync::Lazy;

/// Surface tension of the water-air interface, in N/m.
pub const SIGMA_WATER_AIR: f64 = 0.073;

/// Gravitational acceleration, in m/s^2.
pub const GRAVITY: f64 = 9.81;

/// Density of air, in kg/m^3.
pub const RHO_AIR: f64 = 1.205;

/// Dynamic viscosity of air, in kg/(m s).
///
/// Not the same literal as [`AIR_DYNAMIC_VISCOSITY`] (1.81e-5 vs 1.8e-5); both are kept so that
/// callers get exactly the value they were written against.
pub const AIR_VISCOSITY: f64 = 1.81e-5;

/// Universal gas constant.
pub static GAS_CONSTANT: Lazy<MolarGasConstant<Joules, Moles, Kelvin>> =
    Lazy::new(|| joules_per_mole_kelvin!(8.314));

/// Molar mass of water vapor.
pub static WATER_VAPOR_MOLAR_MASS: Lazy<MolarMass<Kilograms, Moles>> =
    Lazy::new(|| kilograms_per_mole!(18e-3));

/// Density of liquid water.
pub static WATER_DENSITY: Lazy<Density<Kilograms, Meters>> =
    Lazy::new(|| kilograms_per_meter3!(1_000));

/// Dynamic viscosity of air.
pub static AIR_DYNAMIC_VISCOSITY: Lazy<DynamicViscosity<Kilograms, Meters, Seconds>> =
    Lazy::new(|| kilograms_per_meter_second!(1.8e-5));

/// Diffusivity of water vapor in air.
pub static VAPOR_DIFFUSIVITY: Lazy<Diffusivity<Meters, Seconds>> =
    Lazy::new(|| meters2_per_second!(2.5e-5));
