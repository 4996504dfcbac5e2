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
use anyhow::Result;
use log::debug;
use physical_constants::{
    air_density, air_kinematic_viscosity, standard_gravity, water_air_surface_tension,
    water_vapor_gas_constant, Constant, CONSTANTS,
};
use structopt::StructOpt;

/// Print the physical constants used by the rain model
#[derive(Debug, StructOpt)]
struct Opt {
    /// Print only the named constant
    #[structopt(short, long)]
    name: Option<String>,

    /// Also print quantities derived from the constants
    #[structopt(short, long)]
    derived: bool,

    /// Show the SI base-unit dimension of each dimensioned constant
    #[structopt(long)]
    si: bool,
}

fn show(constant: &Constant, si: bool) {
    match constant.dimension() {
        Some(dimension) if si => println!("{}  [{}]", constant, dimension),
        Some(_) => println!("{}", constant),
        None => println!("{}  (bare)", constant),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    debug!("{:?}", opt);

    if let Some(name) = &opt.name {
        show(CONSTANTS.lookup(name)?, opt.si);
    } else {
        for constant in CONSTANTS.iter() {
            show(constant, opt.si);
        }
    }

    if opt.derived {
        println!();
        println!("water_vapor_gas_constant = {}", water_vapor_gas_constant());
        println!("air_density = {}", air_density());
        println!("air_kinematic_viscosity = {}", air_kinematic_viscosity());
        println!("standard_gravity = {}", standard_gravity());
        println!("water_air_surface_tension = {}", water_air_surface_tension());
    }

    Ok(())
}
