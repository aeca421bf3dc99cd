// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use serde::{Serialize, Deserialize};

use stormath::type_aliases::Float;

use crate::error::Error;
use crate::air::RHO_AIR_20C;

use super::force_model::{SailForceModel, SailSpec, RigShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Builder for the sail force model, with the shape parameters and the air density optional
pub struct SailForceModelBuilder {
    pub mainsail: SailSpec,
    pub frontsail: SailSpec,
    pub rig_z_max: Float,
    #[serde(default)]
    pub rig_shape: RigShape,
    #[serde(default="SailForceModelBuilder::default_air_density")]
    pub air_density: Float,
}

impl SailForceModelBuilder {
    pub fn default_air_density() -> Float {RHO_AIR_20C}

    pub fn new(mainsail: SailSpec, frontsail: SailSpec, rig_z_max: Float) -> Self {
        Self {
            mainsail,
            frontsail,
            rig_z_max,
            rig_shape: RigShape::default(),
            air_density: Self::default_air_density(),
        }
    }

    pub fn from_json_string(json_string: &str) -> Result<Self, Error> {
        let builder = serde_json::from_str(json_string)?;

        Ok(builder)
    }

    pub fn from_json_file(file_path: &str) -> Result<Self, Error> {
        let json_string = std::fs::read_to_string(file_path)?;

        Self::from_json_string(&json_string)
    }

    pub fn with_rig_shape(mut self, rig_shape: RigShape) -> Self {
        self.rig_shape = rig_shape;

        self
    }

    pub fn with_air_density(mut self, air_density: Float) -> Self {
        self.air_density = air_density;

        self
    }

    pub fn build(&self) -> Result<SailForceModel, Error> {
        SailForceModel::new(
            self.mainsail,
            self.frontsail,
            self.rig_z_max,
            self.rig_shape,
            self.air_density,
        )
    }
}
