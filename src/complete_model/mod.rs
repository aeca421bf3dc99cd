// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! The complete aero model is a handy way to get all the aerodynamic forces on a boat from one
//! call, for instance from the force balance of a velocity prediction program.

pub mod builder;

use serde::{Serialize, Deserialize};

use stormath::{
    type_aliases::Float,
    spatial_vector::SpatialVector,
};

use crate::error::Error;
use crate::force::Force;
use crate::sail::force_model::SailForceModel;
use crate::windage::{
    hull::HullWindage,
    mast::MastWindage,
};
use crate::wind::state::WindState;

use builder::CompleteAeroModelBuilder;

#[derive(Debug, Clone)]
/// Collection of the sails, the hull windage and, optionally, the mast windage of one boat.
pub struct CompleteAeroModel {
    pub sails: SailForceModel,
    pub hull: HullWindage,
    pub mast: Option<MastWindage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// The forces from each part of the complete model
pub struct CompleteAeroResult {
    pub sails: Force,
    pub hull: Force,
    pub mast: Option<Force>,
}

impl CompleteAeroResult {
    pub fn forces(&self) -> Vec<Force> {
        let mut forces = vec![self.sails, self.hull];

        if let Some(mast) = self.mast {
            forces.push(mast);
        }

        forces
    }

    /// Sum of all the force vectors
    pub fn total_force(&self) -> SpatialVector {
        let mut total = SpatialVector::default();

        for force in self.forces() {
            total += force.force_vector();
        }

        total
    }

    /// Sum of the moments of all the forces about the origin of the boat-fixed coordinate system
    pub fn total_moment(&self) -> SpatialVector {
        let origin = SpatialVector::default();

        let mut total = SpatialVector::default();

        for force in self.forces() {
            total += force.moment_about(origin);
        }

        total
    }
}

impl CompleteAeroModel {
    /// Generate a model from an input json string
    pub fn from_json_string(json_string: &str) -> Result<Self, Error> {
        CompleteAeroModelBuilder::from_json_string(json_string)?.build()
    }

    pub fn from_json_file(file_path: &str) -> Result<Self, Error> {
        CompleteAeroModelBuilder::from_json_file(file_path)?.build()
    }

    pub fn aero_forces(
        &self,
        wind_state: &WindState,
        trim_angle: Float
    ) -> Result<CompleteAeroResult, Error> {
        let mast = match &self.mast {
            Some(mast) => Some(mast.force(wind_state, trim_angle)?),
            None => None,
        };

        Ok(CompleteAeroResult {
            sails: self.sails.aero_force(wind_state, trim_angle)?,
            hull: self.hull.force(wind_state)?,
            mast,
        })
    }
}
