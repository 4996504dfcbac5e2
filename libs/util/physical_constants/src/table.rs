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
    AIR_DYNAMIC_VISCOSITY, AIR_VISCOSITY, GAS_CONSTANT, GRAVITY, RHO_AIR, SIGMA_WATER_AIR,
    VAPOR_DIFFUSIVITY, WATER_DENSITY, WATER_VAPOR_MOLAR_MASS,
};
use absolute_unit::Dimension;
use anyhow::{bail, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::{fmt, str::FromStr};

/// The closed set of constants in the table.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ConstantId {
    GasConstant,
    WaterVaporMolarMass,
    WaterDensity,
    AirDynamicViscosity,
    VaporDiffusivity,
    SigmaWaterAir,
    Gravity,
    RhoAir,
    AirViscosity,
}

impl ConstantId {
    /// All ids, in table order.
    pub const ALL: [ConstantId; 9] = [
        ConstantId::GasConstant,
        ConstantId::WaterVaporMolarMass,
        ConstantId::WaterDensity,
        ConstantId::AirDynamicViscosity,
        ConstantId::VaporDiffusivity,
        ConstantId::SigmaWaterAir,
        ConstantId::Gravity,
        ConstantId::RhoAir,
        ConstantId::AirViscosity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GasConstant => "gas_constant",
            Self::WaterVaporMolarMass => "water_vapor_molar_mass",
            Self::WaterDensity => "water_density",
            Self::AirDynamicViscosity => "air_dynamic_viscosity",
            Self::VaporDiffusivity => "vapor_diffusivity",
            Self::SigmaWaterAir => "sigma_water_air",
            Self::Gravity => "gravity",
            Self::RhoAir => "rho_air",
            Self::AirViscosity => "air_viscosity",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::GasConstant => "universal gas constant",
            Self::WaterVaporMolarMass => "molar mass of water vapor",
            Self::WaterDensity => "density of liquid water",
            Self::AirDynamicViscosity => "dynamic viscosity of air",
            Self::VaporDiffusivity => "diffusivity of water vapor in air",
            Self::SigmaWaterAir => "surface tension of the water-air interface",
            Self::Gravity => "gravitational acceleration",
            Self::RhoAir => "density of air",
            Self::AirViscosity => "dynamic viscosity of air",
        }
    }

    /// The unit the value is expressed in. Only enforced for dimensioned entries.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::GasConstant => "J/(mol K)",
            Self::WaterVaporMolarMass => "kg/mol",
            Self::WaterDensity => "kg/m^3",
            Self::AirDynamicViscosity => "kg/(m s)",
            Self::VaporDiffusivity => "m^2/s",
            Self::SigmaWaterAir => "N/m",
            Self::Gravity => "m/s^2",
            Self::RhoAir => "kg/m^3",
            Self::AirViscosity => "kg/(m s)",
        }
    }

    pub fn is_dimensioned(&self) -> bool {
        matches!(
            self,
            Self::GasConstant
                | Self::WaterVaporMolarMass
                | Self::WaterDensity
                | Self::AirDynamicViscosity
                | Self::VaporDiffusivity
        )
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ConstantId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ConstantId {
    type Err = anyhow::Error;

    /// Names match case-insensitively, with `-` and `_` treated the same.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Some(id) = Self::ALL.iter().find(|id| id.name() == wanted) {
            return Ok(*id);
        }
        match Self::ALL
            .iter()
            .min_by_key(|id| strsim::levenshtein(id.name(), &wanted))
        {
            Some(closest) if strsim::levenshtein(closest.name(), &wanted) <= 3 => {
                bail!("unknown physical constant: {} (did you mean {}?)", s, closest)
            }
            _ => bail!("unknown physical constant: {}", s),
        }
    }
}

/// One row of the constants table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant {
    id: ConstantId,
    magnitude: f64,
    dimension: Option<Dimension>,
}

impl Constant {
    pub fn id(&self) -> ConstantId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The checked dimension of the value; `None` for bare scalars.
    pub fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }

    pub fn unit(&self) -> &'static str {
        self.id.unit()
    }

    pub fn is_dimensioned(&self) -> bool {
        self.dimension.is_some()
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {} {}", self.name(), self.magnitude, self.unit())
    }
}

/// Every constant, built once and never changed.
pub static CONSTANTS: Lazy<ConstantsTable> = Lazy::new(ConstantsTable::build);

#[derive(Debug)]
pub struct ConstantsTable {
    entries: [Constant; 9],
}

impl ConstantsTable {
    fn build() -> Self {
        let entries = ConstantId::ALL.map(|id| {
            let (magnitude, dimension) = match id {
                ConstantId::GasConstant => (GAS_CONSTANT.f64(), Some(GAS_CONSTANT.dimension())),
                ConstantId::WaterVaporMolarMass => (
                    WATER_VAPOR_MOLAR_MASS.f64(),
                    Some(WATER_VAPOR_MOLAR_MASS.dimension()),
                ),
                ConstantId::WaterDensity => {
                    (WATER_DENSITY.f64(), Some(WATER_DENSITY.dimension()))
                }
                ConstantId::AirDynamicViscosity => (
                    AIR_DYNAMIC_VISCOSITY.f64(),
                    Some(AIR_DYNAMIC_VISCOSITY.dimension()),
                ),
                ConstantId::VaporDiffusivity => {
                    (VAPOR_DIFFUSIVITY.f64(), Some(VAPOR_DIFFUSIVITY.dimension()))
                }
                ConstantId::SigmaWaterAir => (SIGMA_WATER_AIR, None),
                ConstantId::Gravity => (GRAVITY, None),
                ConstantId::RhoAir => (RHO_AIR, None),
                ConstantId::AirViscosity => (AIR_VISCOSITY, None),
            };
            Constant {
                id,
                magnitude,
                dimension,
            }
        });
        let table = Self { entries };
        debug!(
            "built physical constants table: {} dimensioned, {} bare",
            table.dimensioned().count(),
            table.bare().count()
        );

        let drift = table.viscosity_drift();
        if drift > 0. {
            warn!(
                "{} ({}) and {} ({}) both describe the {} but differ by {:.2}%",
                ConstantId::AirDynamicViscosity,
                table.get(ConstantId::AirDynamicViscosity).magnitude(),
                ConstantId::AirViscosity,
                table.get(ConstantId::AirViscosity).magnitude(),
                ConstantId::AirViscosity.description(),
                drift * 100.
            );
        }
        table
    }

    pub fn get(&self, id: ConstantId) -> &Constant {
        &self.entries[id.index()]
    }

    pub fn lookup(&self, name: &str) -> Result<&Constant> {
        Ok(self.get(name.parse()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constant> {
        self.entries.iter()
    }

    pub fn dimensioned(&self) -> impl Iterator<Item = &Constant> {
        self.iter().filter(|c| c.is_dimensioned())
    }

    pub fn bare(&self) -> impl Iterator<Item = &Constant> {
        self.iter().filter(|c| !c.is_dimensioned())
    }

    /// Relative difference between the two air viscosity entries, against the dimensioned one.
    pub fn viscosity_drift(&self) -> f64 {
        let dimensioned = self.get(ConstantId::AirDynamicViscosity).magnitude();
        let bare = self.get(ConstantId::AirViscosity).magnitude();
        ((bare - dimensioned) / dimensioned).abs()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ids_are_in_table_order() {
        for (i, id) in ConstantId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(CONSTANTS.get(*id).id(), *id);
        }
    }

    #[test]
    fn test_parse_names() -> Result<()> {
        for id in ConstantId::ALL {
            assert_eq!(id.name().parse::<ConstantId>()?, id);
        }
        assert_eq!("Gas-Constant".parse::<ConstantId>()?, ConstantId::GasConstant);
        assert_eq!(" rho_air ".parse::<ConstantId>()?, ConstantId::RhoAir);
        Ok(())
    }

    #[test]
    fn test_unknown_name_suggests() {
        let err = "gravty".parse::<ConstantId>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown physical constant: gravty (did you mean gravity?)"
        );
        let err = "planck_constant".parse::<ConstantId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown physical constant: planck_constant");
    }

    #[test]
    fn test_split() {
        assert_eq!(CONSTANTS.iter().count(), ConstantId::ALL.len());
        assert_eq!(CONSTANTS.dimensioned().count(), 5);
        assert_eq!(CONSTANTS.bare().count(), 4);
        for c in CONSTANTS.iter() {
            assert_eq!(c.is_dimensioned(), c.id().is_dimensioned());
        }
    }

    #[test]
    fn test_viscosity_drift() {
        assert_abs_diff_eq!(CONSTANTS.viscosity_drift(), 0.1 / 18., epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CONSTANTS.get(ConstantId::Gravity).to_string(),
            "gravity = 9.81 m/s^2"
        );
        assert_eq!(
            CONSTANTS.get(ConstantId::WaterDensity).to_string(),
            "water_density = 1000 kg/m^3"
        );
    }
}
