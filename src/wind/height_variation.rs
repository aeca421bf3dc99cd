// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Models for the variation of the wind speed with the height above the water.

use serde::{Serialize, Deserialize};

use stormath::type_aliases::Float;

use crate::error::Error;

fn check_reference(wind_speed_known: Float, height_reference: Float) -> Result<(), Error> {
    if !(wind_speed_known >= 0.0) {
        return Err(Error::invalid_parameter(format!(
            "the known wind speed must be positive or zero, got {}", wind_speed_known
        )));
    }

    if !(height_reference > 0.0) {
        return Err(Error::invalid_parameter(format!(
            "the reference height must be strictly positive, got {}", height_reference
        )));
    }

    Ok(())
}

/// Wind profile power law.
///
/// `alpha` is the Hellman exponent. 0.11 is recommended over open water and 1/7 over land. Some
/// typical values:
///
/// | Conditions                           | alpha |
/// |--------------------------------------|-------|
/// | Unstable air above open water        | 0.06  |
/// | Neutral air above open water         | 0.10  |
/// | Unstable air above flat open coast   | 0.11  |
/// | Neutral air above flat open coast    | 0.16  |
/// | Stable air above open water          | 0.27  |
/// | Stable air above flat open coast     | 0.40  |
pub fn power_law(
    wind_speed_known: Float,
    height_reference: Float,
    height: Float,
    alpha: Float
) -> Result<Float, Error> {
    check_reference(wind_speed_known, height_reference)?;

    if !(height >= 0.0) {
        return Err(Error::invalid_parameter(format!(
            "the height must be positive or zero, got {}", height
        )));
    }

    if !(alpha > 0.0) {
        return Err(Error::invalid_parameter(format!(
            "the power law exponent must be strictly positive, got {}", alpha
        )));
    }

    Ok(wind_speed_known * (height / height_reference).powf(alpha))
}

/// Logarithmic wind profile.
///
/// The default roughness length of 0.0002 m represents seas and lakes. Open terrain with a smooth
/// surface is around 0.0024 m and open agricultural land around 0.03 m.
pub fn logarithmic(
    wind_speed_known: Float,
    height_reference: Float,
    height: Float,
    roughness_length: Float
) -> Result<Float, Error> {
    check_reference(wind_speed_known, height_reference)?;

    if !(height > 0.0) {
        return Err(Error::invalid_parameter(format!(
            "the height must be strictly positive, got {}", height
        )));
    }

    if !(roughness_length > 0.0) {
        return Err(Error::invalid_parameter(format!(
            "the roughness length must be strictly positive, got {}", roughness_length
        )));
    }

    Ok(
        wind_speed_known * (height / roughness_length).ln() /
        (height_reference / roughness_length).ln()
    )
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerModel {
    #[serde(default="PowerModel::default_reference_height")]
    pub reference_height: Float,
    #[serde(default="PowerModel::default_power_factor")]
    pub power_factor: Float,
}

impl PowerModel {
    pub fn default_reference_height() -> Float {10.0}
    pub fn default_power_factor() -> Float {0.11}
}

impl Default for PowerModel {
    fn default() -> Self {
        Self {
            reference_height: Self::default_reference_height(),
            power_factor: Self::default_power_factor(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogarithmicModel {
    #[serde(default="LogarithmicModel::default_reference_height")]
    pub reference_height: Float,
    #[serde(default="LogarithmicModel::default_surface_roughness")]
    pub surface_roughness: Float,
}

impl LogarithmicModel {
    pub fn default_reference_height() -> Float {10.0}
    pub fn default_surface_roughness() -> Float {0.0002}
}

impl Default for LogarithmicModel {
    fn default() -> Self {
        Self {
            reference_height: Self::default_reference_height(),
            surface_roughness: Self::default_surface_roughness(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
/// Variation of the wind speed with height, relative to the speed at a reference height
pub enum HeightVariationModel {
    PowerModel(PowerModel),
    LogarithmicModel(LogarithmicModel),
}

impl HeightVariationModel {
    pub fn velocity_increase_factor(&self, height: Float) -> Result<Float, Error> {
        match self {
            HeightVariationModel::PowerModel(model) => {
                power_law(1.0, model.reference_height, height, model.power_factor)
            },
            HeightVariationModel::LogarithmicModel(model) => {
                logarithmic(1.0, model.reference_height, height, model.surface_roughness)
            },
        }
    }
}
