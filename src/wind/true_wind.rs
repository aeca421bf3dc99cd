// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! True wind from the apparent wind, the boat speed and the heel angle.
//!
//! The inverse transform is singular for a boat lying flat on the water, so the heel angle is
//! always checked and must stay within [-89, 89] degrees.

use stormath::type_aliases::Float;

use crate::error::Error;

use super::condition::WindCondition;
use super::tack_sign;

fn check_input(
    apparent_wind_speed: Float,
    apparent_wind_angle: Float,
    heel_angle: Float,
) -> Result<(), Error> {
    if !(apparent_wind_speed >= 0.0) {
        return Err(Error::domain(format!(
            "the apparent wind speed must be positive or zero, got {}", apparent_wind_speed
        )));
    }

    if !(-180.0..=180.0).contains(&apparent_wind_angle) {
        return Err(Error::domain(format!(
            "the apparent wind angle must be between -180 and 180 degrees, got {}",
            apparent_wind_angle
        )));
    }

    if !(-89.0..=89.0).contains(&heel_angle) {
        return Err(Error::domain(format!(
            "cannot compute the true wind for a boat heeled more than 89 degrees, got {}",
            heel_angle
        )));
    }

    Ok(())
}

/// Components of the true wind, perpendicular to and along the boat, from the magnitude of the
/// apparent wind angle.
fn true_wind_components(
    apparent_wind_speed: Float,
    apparent_wind_angle: Float,
    boatspeed: Float,
    heel_angle: Float,
) -> (Float, Float) {
    let awa_corrected = apparent_wind_angle.abs() / heel_angle.to_radians().cos();

    let complement = (90.0 - awa_corrected).to_radians();

    let cross_component = apparent_wind_speed * complement.cos();
    let along_component = apparent_wind_speed * complement.sin() - boatspeed;

    (cross_component, along_component)
}

/// True wind angle, in degrees, with the same sign as the apparent wind angle.
///
/// # Arguments
/// * `apparent_wind_speed` - in m/s, must be positive or zero
/// * `apparent_wind_angle` - in degrees, between -180 and 180
/// * `boatspeed` - in m/s, negative when the boat moves backwards
/// * `heel_angle` - in degrees, between -89 and 89
pub fn true_wind_angle(
    apparent_wind_speed: Float,
    apparent_wind_angle: Float,
    boatspeed: Float,
    heel_angle: Float,
) -> Result<Float, Error> {
    check_input(apparent_wind_speed, apparent_wind_angle, heel_angle)?;

    let sign = tack_sign(apparent_wind_angle);

    let (cross_component, along_component) = true_wind_components(
        apparent_wind_speed, apparent_wind_angle, boatspeed, heel_angle
    );

    if cross_component == 0.0 {
        return Ok(0.0);
    }

    Ok(sign * (90.0 - (along_component / cross_component).atan().to_degrees()))
}

/// True wind speed, in m/s. Always positive or zero.
///
/// Takes the same arguments as [`true_wind_angle`].
pub fn true_wind_speed(
    apparent_wind_speed: Float,
    apparent_wind_angle: Float,
    boatspeed: Float,
    heel_angle: Float,
) -> Result<Float, Error> {
    check_input(apparent_wind_speed, apparent_wind_angle, heel_angle)?;

    let (cross_component, along_component) = true_wind_components(
        apparent_wind_speed, apparent_wind_angle, boatspeed, heel_angle
    );

    Ok((cross_component.powi(2) + along_component.powi(2)).sqrt())
}

pub fn true_wind(
    apparent_wind_speed: Float,
    apparent_wind_angle: Float,
    boatspeed: Float,
    heel_angle: Float,
) -> Result<WindCondition, Error> {
    Ok(WindCondition {
        speed: true_wind_speed(apparent_wind_speed, apparent_wind_angle, boatspeed, heel_angle)?,
        angle: true_wind_angle(apparent_wind_speed, apparent_wind_angle, boatspeed, heel_angle)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::wind::apparent::{apparent_wind_angle, apparent_wind_speed};

    #[test]
    fn test_wrong_input() {
        assert!(matches!(true_wind_angle(-1.0, 45.0, 0.0, 0.0), Err(Error::Domain(_))));
        assert!(true_wind_angle(1.0, -181.0, 0.0, 0.0).is_err());
        assert!(true_wind_angle(1.0, 181.0, 0.0, 0.0).is_err());

        assert!(true_wind_speed(-1.0, 45.0, 0.0, 0.0).is_err());
        assert!(true_wind_speed(1.0, -181.0, 0.0, 0.0).is_err());
        assert!(true_wind_speed(1.0, 181.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_90_degrees_heel_is_rejected() {
        for &heel in &[90.0, -90.0, 89.5] {
            assert!(matches!(true_wind_angle(10.0, 75.0, 3.0, heel), Err(Error::Domain(_))));
            assert!(true_wind_speed(10.0, 75.0, 3.0, heel).is_err());
        }

        assert!(true_wind_angle(10.0, 75.0, 3.0, 89.0).is_ok());
    }

    #[test]
    fn test_zero_boatspeed() {
        assert_abs_diff_eq!(true_wind_angle(10.0, 45.0, 0.0, 0.0).unwrap(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(true_wind_angle(10.0, -165.0, 0.0, 0.0).unwrap(), -165.0, epsilon = 1e-6);
        assert_abs_diff_eq!(true_wind_angle(10.0, 90.0, 0.0, 0.0).unwrap(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_known_values() {
        let aws = 10.0 * Float::sqrt(2.0);

        assert_abs_diff_eq!(true_wind_angle(aws, 45.0, 10.0, 0.0).unwrap(), 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(true_wind_speed(aws, 45.0, 10.0, 0.0).unwrap(), 10.0, epsilon = 1e-6);

        assert_abs_diff_eq!(true_wind_speed(10.0, 0.0, 10.0, 0.0).unwrap(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(true_wind_speed(10.0, 180.0, 3.0, 0.0).unwrap(), 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_going_backwards() {
        let aws = 10.0 * Float::sqrt(2.0);

        assert_abs_diff_eq!(true_wind_angle(aws, 135.0, -10.0, 0.0).unwrap(), 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(true_wind_angle(0.0, 0.0, -10.0, 0.0).unwrap(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(true_wind_speed(10.0, 0.0, -10.0, 0.0).unwrap(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_opposite_heel_angles() {
        let heeled = true_wind_angle(10.0, 120.0, 3.0, 40.0).unwrap();
        let counter_heeled = true_wind_angle(10.0, 120.0, 3.0, -40.0).unwrap();

        assert_eq!(heeled, counter_heeled);
    }

    #[test]
    fn test_symmetry() {
        let starboard = true_wind(10.0, 45.0, 3.0, 0.0).unwrap();
        let port = true_wind(10.0, -45.0, 3.0, 0.0).unwrap();

        assert_eq!(starboard.speed, port.speed);
        assert_eq!(starboard.angle, -port.angle);
    }

    #[test]
    fn test_round_trip_upright() {
        for &twa in &[-170.0, -120.0, -45.0, 5.0, 30.0, 60.0, 90.0, 150.0, 175.0] {
            for &boatspeed in &[0.5, 2.0, 6.0] {
                let tws = 8.0;

                let awa = apparent_wind_angle(tws, twa, boatspeed, 0.0, false).unwrap();
                let aws = apparent_wind_speed(tws, twa, boatspeed, 0.0, false).unwrap();

                assert_abs_diff_eq!(true_wind_angle(aws, awa, boatspeed, 0.0).unwrap(), twa, epsilon = 1e-6);
                assert_abs_diff_eq!(true_wind_speed(aws, awa, boatspeed, 0.0).unwrap(), tws, epsilon = 1e-6);
            }
        }
    }
}
