// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use serde::{Serialize, Deserialize};

use stormath::type_aliases::Float;

use crate::error::Error;

use super::apparent;
use super::condition::WindCondition;
use super::tack_sign;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// The true wind and the state of the boat for a single evaluation of the force models.
///
/// The values are not validated when the structure is created. A solver is free to set up states
/// outside of the valid domain, and the force models report the errors when they are evaluated.
pub struct WindState {
    /// True wind speed, in m/s
    pub true_wind_speed: Float,
    /// True wind angle, in degrees. Positive on starboard tack.
    pub true_wind_angle: Float,
    /// Boat speed, in m/s. Negative when moving backwards.
    pub boatspeed: Float,
    /// Heel angle, in degrees. Positive when heeling to leeward.
    #[serde(default)]
    pub heel_angle: Float,
}

impl WindState {
    pub fn new(
        true_wind_speed: Float,
        true_wind_angle: Float,
        boatspeed: Float,
        heel_angle: Float
    ) -> Self {
        Self {
            true_wind_speed,
            true_wind_angle,
            boatspeed,
            heel_angle,
        }
    }

    pub fn upright(true_wind_speed: Float, true_wind_angle: Float, boatspeed: Float) -> Self {
        Self::new(true_wind_speed, true_wind_angle, boatspeed, 0.0)
    }

    pub fn with_heel_angle(&self, heel_angle: Float) -> Self {
        Self {
            heel_angle,
            ..*self
        }
    }

    /// The same state on the opposite tack
    pub fn mirrored(&self) -> Self {
        Self {
            true_wind_angle: -self.true_wind_angle,
            ..*self
        }
    }

    pub fn tack_sign(&self) -> Float {
        tack_sign(self.true_wind_angle)
    }

    pub fn apparent_wind_angle(&self, check_heel_angle: bool) -> Result<Float, Error> {
        apparent::apparent_wind_angle(
            self.true_wind_speed,
            self.true_wind_angle,
            self.boatspeed,
            self.heel_angle,
            check_heel_angle
        )
    }

    pub fn apparent_wind_speed(&self, check_heel_angle: bool) -> Result<Float, Error> {
        apparent::apparent_wind_speed(
            self.true_wind_speed,
            self.true_wind_angle,
            self.boatspeed,
            self.heel_angle,
            check_heel_angle
        )
    }

    pub fn apparent_wind(&self, check_heel_angle: bool) -> Result<WindCondition, Error> {
        apparent::apparent_wind(
            self.true_wind_speed,
            self.true_wind_angle,
            self.boatspeed,
            self.heel_angle,
            check_heel_angle
        )
    }
}
