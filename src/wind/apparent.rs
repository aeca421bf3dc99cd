// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Apparent wind from the true wind, the boat speed and the heel angle.
//!
//! The heel angle check can be switched off. The functions are evaluated over and over by
//! solvers that search for the equilibrium heel angle, and such a solver must be able to step
//! through unrealistic heel angles on its own instead of being stopped by an error.

use stormath::type_aliases::Float;

use crate::error::Error;

use super::condition::WindCondition;
use super::tack_sign;

fn check_input(
    true_wind_speed: Float,
    true_wind_angle: Float,
    heel_angle: Float,
    check_heel_angle: bool
) -> Result<(), Error> {
    if !(true_wind_speed >= 0.0) {
        return Err(Error::domain(format!(
            "the true wind speed must be positive or zero, got {}", true_wind_speed
        )));
    }

    if !(-180.0..=180.0).contains(&true_wind_angle) {
        return Err(Error::domain(format!(
            "the true wind angle must be between -180 and 180 degrees, got {}", true_wind_angle
        )));
    }

    if check_heel_angle && !(-90.0..=90.0).contains(&heel_angle) {
        return Err(Error::domain(format!(
            "the heel angle must be between -90 and 90 degrees, got {}", heel_angle
        )));
    }

    Ok(())
}

/// Apparent wind angle, in degrees.
///
/// The result has the same sign as the true wind angle, meaning positive on starboard tack and
/// negative on port tack.
///
/// # Arguments
/// * `true_wind_speed` - in m/s, must be positive or zero
/// * `true_wind_angle` - in degrees, between -180 and 180
/// * `boatspeed` - in m/s, negative when the boat moves backwards
/// * `heel_angle` - in degrees, positive when the boat heels to leeward
/// * `check_heel_angle` - return an error if the heel angle is outside of [-90, 90]
pub fn apparent_wind_angle(
    true_wind_speed: Float,
    true_wind_angle: Float,
    boatspeed: Float,
    heel_angle: Float,
    check_heel_angle: bool,
) -> Result<Float, Error> {
    check_input(true_wind_speed, true_wind_angle, heel_angle, check_heel_angle)?;

    let sign = tack_sign(true_wind_angle);

    let twa = true_wind_angle.abs().to_radians();
    let heel = heel_angle.to_radians();

    let along_component = true_wind_speed * twa.cos() + boatspeed;
    let cross_component = true_wind_speed * twa.sin() * heel.cos();

    let mut awa = if along_component == 0.0 {
        0.0
    } else {
        (cross_component / along_component).atan().to_degrees()
    };

    // The arc tangent is negative when the apparent wind comes from behind the beam
    if awa < 0.0 {
        awa += 180.0;
    }

    if !(-180.0..=180.0).contains(&awa) {
        return Err(Error::domain(format!(
            "the apparent wind angle must be between -180 and 180 degrees, got {}", awa
        )));
    }

    Ok(awa * sign)
}

/// Apparent wind speed, in m/s. Always positive or zero.
///
/// Takes the same arguments as [`apparent_wind_angle`].
pub fn apparent_wind_speed(
    true_wind_speed: Float,
    true_wind_angle: Float,
    boatspeed: Float,
    heel_angle: Float,
    check_heel_angle: bool,
) -> Result<Float, Error> {
    check_input(true_wind_speed, true_wind_angle, heel_angle, check_heel_angle)?;

    let twa = true_wind_angle.to_radians();
    let heel = heel_angle.to_radians();

    let cross_component = true_wind_speed * twa.sin() * heel.cos();
    let along_component = true_wind_speed * twa.cos() + boatspeed;

    Ok((cross_component.powi(2) + along_component.powi(2)).sqrt())
}

pub fn apparent_wind(
    true_wind_speed: Float,
    true_wind_angle: Float,
    boatspeed: Float,
    heel_angle: Float,
    check_heel_angle: bool,
) -> Result<WindCondition, Error> {
    Ok(WindCondition {
        speed: apparent_wind_speed(
            true_wind_speed, true_wind_angle, boatspeed, heel_angle, check_heel_angle
        )?,
        angle: apparent_wind_angle(
            true_wind_speed, true_wind_angle, boatspeed, heel_angle, check_heel_angle
        )?,
    })
}
