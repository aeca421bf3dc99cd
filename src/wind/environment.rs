// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

/// Functionality to represent the wind environment the boat is sailing in

use stormath::type_aliases::Float;
use serde::{Serialize, Deserialize};
use serde_json;

use crate::error::Error;
use crate::air::{self, RHO_AIR_20C};

use super::height_variation::HeightVariationModel;
use super::state::WindState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Structure used to represent a wind environment. The true wind speed of a wind state is taken
/// as the speed at the reference height of the height variation model, when such a model is
/// given.
pub struct WindEnvironment {
    #[serde(default)]
    pub height_variation_model: Option<HeightVariationModel>,
    #[serde(default="WindEnvironment::default_air_density")]
    pub air_density: Float,
}

impl Default for WindEnvironment {
    fn default() -> Self {
        Self {
            height_variation_model: None,
            air_density: Self::default_air_density(),
        }
    }
}

impl WindEnvironment {
    pub fn default_air_density() -> Float {RHO_AIR_20C}

    pub fn from_json_string(json_string: &str) -> Result<Self, Error> {
        let serde_res = serde_json::from_str(json_string)?;

        Ok(serde_res)
    }

    pub fn from_json_file(file_path: &str) -> Result<Self, Error> {
        let json_string = std::fs::read_to_string(file_path)?;

        Self::from_json_string(&json_string)
    }

    /// Environment with the air density computed from the air temperature, in degrees celsius
    pub fn from_air_temperature(
        temperature: Float,
        height_variation_model: Option<HeightVariationModel>
    ) -> Result<Self, Error> {
        Ok(Self {
            height_variation_model,
            air_density: air::density_air(temperature)?,
        })
    }

    /// Computes the true wind speed at the input height, based on the speed at the reference height
    pub fn true_wind_speed_at_height(
        &self,
        reference_wind_speed: Float,
        height: Float
    ) -> Result<Float, Error> {
        let increase_factor = if let Some(model) = self.height_variation_model {
            if height > 0.0 {
                model.velocity_increase_factor(height)?
            } else {
                0.0
            }
        } else {
            1.0
        };

        Ok(increase_factor * reference_wind_speed)
    }

    /// Returns a copy of the wind state where the true wind speed is the speed at the input height
    pub fn wind_state_at_height(
        &self,
        reference_state: &WindState,
        height: Float
    ) -> Result<WindState, Error> {
        Ok(WindState {
            true_wind_speed: self.true_wind_speed_at_height(
                reference_state.true_wind_speed, height
            )?,
            ..*reference_state
        })
    }
}
