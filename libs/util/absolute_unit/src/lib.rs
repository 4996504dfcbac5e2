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

//! Scalars with units.
//!
//! Units are zero-sized marker types that implement [`Unit`] and one of the per-kind traits;
//! quantities are generic over the units they are stored in and convert on demand. Every
//! quantity can also be lowered to [`DynamicUnits`] to check its [`Dimension`] at runtime.
pub(crate) mod acceleration;
pub(crate) mod amount;
pub(crate) mod area;
pub(crate) mod density;
pub(crate) mod diffusivity;
pub(crate) mod dimension;
pub(crate) mod dynamic_unit;
pub(crate) mod dynamic_viscosity;
pub(crate) mod energy;
pub(crate) mod force;
pub(crate) mod generic;
pub(crate) mod length;
pub(crate) mod mass;
pub(crate) mod molar_gas_constant;
pub(crate) mod molar_mass;
pub(crate) mod specific_gas_constant;
pub(crate) mod surface_tension;
pub(crate) mod temperature;
pub(crate) mod time;
pub(crate) mod unit;
pub(crate) mod velocity;
pub(crate) mod volume;

pub use crate::{
    acceleration::Acceleration,
    amount::{Amount, AmountUnit},
    area::Area,
    density::Density,
    diffusivity::Diffusivity,
    dimension::Dimension,
    dynamic_unit::DynamicUnits,
    dynamic_viscosity::DynamicViscosity,
    energy::{Energy, EnergyUnit},
    force::{Force, ForceUnit},
    length::{Length, LengthUnit},
    mass::{Mass, MassUnit},
    molar_gas_constant::MolarGasConstant,
    molar_mass::MolarMass,
    specific_gas_constant::SpecificGasConstant,
    surface_tension::SurfaceTension,
    temperature::TemperatureUnit,
    time::{Time, TimeUnit},
    unit::{
        calories::Calories, celsius::Celsius, centimeters::Centimeters, dynes::Dynes,
        grams::Grams, hours::Hours, joules::Joules, kelvin::Kelvin, kilograms::Kilograms,
        kilometers::Kilometers, kilomoles::Kilomoles, meters::Meters, moles::Moles,
        newtons::Newtons, scalar::Scalar, seconds::Seconds, Unit,
    },
    velocity::Velocity,
    volume::Volume,
};

pub use approx;
pub use ordered_float;
