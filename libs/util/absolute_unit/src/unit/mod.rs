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
use crate::Dimension;
use std::fmt::Debug;

/// A registered unit of measure.
///
/// Implementing this on a marker type registers the unit: its names and the dimension it
/// measures. The per-kind traits (`LengthUnit`, `MassUnit`, ...) add conversion factors.
pub trait Unit: Copy + Debug + Eq + PartialEq + 'static {
    const UNIT_NAME: &'static str;
    const UNIT_SHORT_NAME: &'static str;
    const UNIT_SUFFIX: &'static str;
    const DIMENSION: Dimension;
}

// Unitless
pub(crate) mod scalar;

// Distance
pub(crate) mod centimeters;
pub(crate) mod kilometers;
pub(crate) mod meters;

// Temperature
pub(crate) mod celsius;
pub(crate) mod kelvin;

// Mass
pub(crate) mod grams;
pub(crate) mod kilograms;

// Time
pub(crate) mod hours;
pub(crate) mod seconds;

// Amount of substance
pub(crate) mod kilomoles;
pub(crate) mod moles;

// Force
pub(crate) mod dynes;
pub(crate) mod newtons;

// Energy
pub(crate) mod calories;
pub(crate) mod joules;
