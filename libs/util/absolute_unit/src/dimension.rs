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
use std::{
    fmt,
    ops::{Div, Mul},
};

/// Exponents over the SI base dimensions that show up in cloud and rain physics.
///
/// Every registered unit carries one of these, so any quantity can report what it measures
/// independently of the concrete units it happens to be stored in.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Dimension {
    mass: i8,
    length: i8,
    time: i8,
    temperature: i8,
    amount: i8,
}

impl Dimension {
    pub const NONE: Self = Self::new(0, 0, 0, 0, 0);
    pub const MASS: Self = Self::new(1, 0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(0, 1, 0, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0);
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 1, 0);
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 1);

    pub const AREA: Self = Self::LENGTH.times(Self::LENGTH);
    pub const VOLUME: Self = Self::AREA.times(Self::LENGTH);
    pub const VELOCITY: Self = Self::LENGTH.per(Self::TIME);
    pub const ACCELERATION: Self = Self::VELOCITY.per(Self::TIME);
    pub const FORCE: Self = Self::MASS.times(Self::ACCELERATION);
    pub const ENERGY: Self = Self::FORCE.times(Self::LENGTH);
    pub const DENSITY: Self = Self::MASS.per(Self::VOLUME);
    pub const MOLAR_MASS: Self = Self::MASS.per(Self::AMOUNT);
    pub const MOLAR_GAS_CONSTANT: Self = Self::ENERGY.per(Self::AMOUNT).per(Self::TEMPERATURE);
    pub const SPECIFIC_GAS_CONSTANT: Self = Self::ENERGY.per(Self::MASS).per(Self::TEMPERATURE);
    pub const DYNAMIC_VISCOSITY: Self = Self::MASS.per(Self::LENGTH).per(Self::TIME);
    pub const DIFFUSIVITY: Self = Self::AREA.per(Self::TIME);
    pub const SURFACE_TENSION: Self = Self::FORCE.per(Self::LENGTH);

    pub const fn new(mass: i8, length: i8, time: i8, temperature: i8, amount: i8) -> Self {
        Self {
            mass,
            length,
            time,
            temperature,
            amount,
        }
    }

    pub const fn times(self, other: Self) -> Self {
        Self::new(
            self.mass + other.mass,
            self.length + other.length,
            self.time + other.time,
            self.temperature + other.temperature,
            self.amount + other.amount,
        )
    }

    pub const fn per(self, other: Self) -> Self {
        Self::new(
            self.mass - other.mass,
            self.length - other.length,
            self.time - other.time,
            self.temperature - other.temperature,
            self.amount - other.amount,
        )
    }

    pub const fn powi(self, n: i8) -> Self {
        Self::new(
            self.mass * n,
            self.length * n,
            self.time * n,
            self.temperature * n,
            self.amount * n,
        )
    }

    pub fn mass(&self) -> i8 {
        self.mass
    }

    pub fn length(&self) -> i8 {
        self.length
    }

    pub fn time(&self) -> i8 {
        self.time
    }

    pub fn temperature(&self) -> i8 {
        self.temperature
    }

    pub fn amount(&self) -> i8 {
        self.amount
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::NONE
    }

    fn exponents(&self) -> [(&'static str, i8); 5] {
        [
            ("kg", self.mass),
            ("m", self.length),
            ("s", self.time),
            ("K", self.temperature),
            ("mol", self.amount),
        ]
    }
}

impl Mul<Dimension> for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Self::Output {
        self.times(rhs)
    }
}

impl Div<Dimension> for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Self::Output {
        self.per(rhs)
    }
}

/// Formats as SI base units, e.g. `kg m^2 s^-2 K^-1 mol^-1`.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let mut first = true;
        for (symbol, exponent) in self.exponents() {
            if exponent == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exponent == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}^{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_derived_dimensions() {
        assert_eq!(Dimension::FORCE, Dimension::new(1, 1, -2, 0, 0));
        assert_eq!(Dimension::ENERGY, Dimension::new(1, 2, -2, 0, 0));
        assert_eq!(Dimension::MOLAR_GAS_CONSTANT, Dimension::new(1, 2, -2, -1, -1));
        assert_eq!(Dimension::DYNAMIC_VISCOSITY, Dimension::new(1, -1, -1, 0, 0));
        assert_eq!(Dimension::DIFFUSIVITY, Dimension::new(0, 2, -1, 0, 0));
        assert_eq!(Dimension::SURFACE_TENSION, Dimension::new(1, 0, -2, 0, 0));
    }

    #[test]
    fn test_dimension_ops() {
        assert_eq!(Dimension::LENGTH * Dimension::LENGTH, Dimension::AREA);
        assert_eq!(Dimension::AREA / Dimension::AREA, Dimension::NONE);
        assert_eq!(Dimension::LENGTH.powi(3), Dimension::VOLUME);
        assert!((Dimension::DENSITY / Dimension::DENSITY).is_dimensionless());
        // Kinematic viscosity and diffusivity measure the same thing.
        assert_eq!(
            Dimension::DYNAMIC_VISCOSITY / Dimension::DENSITY,
            Dimension::DIFFUSIVITY
        );
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(
            Dimension::MOLAR_GAS_CONSTANT.to_string(),
            "kg m^2 s^-2 K^-1 mol^-1"
        );
        assert_eq!(Dimension::DENSITY.to_string(), "kg m^-3");
        assert_eq!(Dimension::LENGTH.to_string(), "m");
        assert_eq!(Dimension::NONE.to_string(), "1");
    }
}
