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
// Kept in its own test binary so that nothing touches the constants before the workers race to
// build them.
use physical_constants::{
    ConstantId, AIR_DYNAMIC_VISCOSITY, CONSTANTS, GAS_CONSTANT, VAPOR_DIFFUSIVITY, WATER_DENSITY,
    WATER_VAPOR_MOLAR_MASS,
};
use rayon::prelude::*;

fn read_all() -> Vec<u64> {
    let mut out = vec![
        GAS_CONSTANT.f64().to_bits(),
        WATER_VAPOR_MOLAR_MASS.f64().to_bits(),
        WATER_DENSITY.f64().to_bits(),
        AIR_DYNAMIC_VISCOSITY.f64().to_bits(),
        VAPOR_DIFFUSIVITY.f64().to_bits(),
    ];
    out.extend(CONSTANTS.iter().map(|c| c.magnitude().to_bits()));
    out
}

#[test]
fn test_racing_first_access() {
    let seen = (0..256)
        .into_par_iter()
        .map(|i| {
            // Alternate which side is forced first.
            if i % 2 == 0 {
                let density = CONSTANTS.get(ConstantId::WaterDensity).magnitude();
                assert_eq!(density, 1000.);
            }
            read_all()
        })
        .collect::<Vec<_>>();

    let literals = [8.314, 0.018, 1000., 1.8e-5, 2.5e-5];
    let table = [
        8.314, 0.018, 1000., 1.8e-5, 2.5e-5, 0.073, 9.81, 1.205, 1.81e-5,
    ];
    let expect = literals
        .iter()
        .chain(table.iter())
        .map(|v: &f64| v.to_bits())
        .collect::<Vec<_>>();
    for snapshot in &seen {
        assert_eq!(snapshot, &expect);
        assert_eq!(snapshot, &seen[0]);
    }
}
