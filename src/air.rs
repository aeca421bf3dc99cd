// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Properties of air as a function of temperature.

use once_cell::sync::Lazy;

use stormath::type_aliases::Float;

use crate::error::Error;
use crate::interpolation::PchipInterpolant;

/// Density of air at 20 degrees celsius, in kg/m^3
pub const RHO_AIR_20C: Float = 1.205;

/// Temperatures, in degrees celsius, where the air properties are tabulated
pub const TEMPERATURES: [Float; 7] = [-50.0, 0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
/// Air density, in kg/m^3
pub const DENSITIES_AIR: [Float; 7] = [1.534, 1.293, 1.205, 1.127, 1.067, 1.000, 0.946];
/// Kinematic viscosity of air, in m^2/s
pub const KINEMATIC_VISCOSITIES_AIR: [Float; 7] = [
    9.55e-6, 13.30e-6, 15.11e-6, 16.97e-6, 18.90e-6, 20.94e-6, 23.06e-6
];

static DENSITY_INTERPOLANT: Lazy<PchipInterpolant> = Lazy::new(|| {
    PchipInterpolant::new(&TEMPERATURES, &DENSITIES_AIR)
        .expect("the air density table has strictly increasing temperatures")
});

static KINEMATIC_VISCOSITY_INTERPOLANT: Lazy<PchipInterpolant> = Lazy::new(|| {
    PchipInterpolant::new(&TEMPERATURES, &KINEMATIC_VISCOSITIES_AIR)
        .expect("the air viscosity table has strictly increasing temperatures")
});

/// Air density, in kg/m^3, at the given temperature in degrees celsius
pub fn density_air(temperature: Float) -> Result<Float, Error> {
    DENSITY_INTERPOLANT.value(temperature).ok_or_else(
        || out_of_table_error(temperature)
    )
}

/// Kinematic viscosity of air, in m^2/s, at the given temperature in degrees celsius
pub fn kinematic_viscosity_air(temperature: Float) -> Result<Float, Error> {
    KINEMATIC_VISCOSITY_INTERPOLANT.value(temperature).ok_or_else(
        || out_of_table_error(temperature)
    )
}

fn out_of_table_error(temperature: Float) -> Error {
    Error::domain(format!(
        "air properties are tabulated between {} and {} degrees celsius, got {}",
        TEMPERATURES[0],
        TEMPERATURES[TEMPERATURES.len() - 1],
        temperature
    ))
}
