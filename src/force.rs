// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! The force representation shared by all the models in the library.

use serde::{Serialize, Deserialize};

use stormath::{
    type_aliases::Float,
    spatial_vector::SpatialVector
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// A force and the point where it is applied, both given in the boat-fixed coordinate system with
/// x pointing forward and y pointing to starboard.
pub struct Force {
    pub fx: Float,
    pub fy: Float,
    pub fz: Float,
    pub px: Float,
    pub py: Float,
    pub pz: Float,
}

impl Force {
    pub fn new(fx: Float, fy: Float, fz: Float, px: Float, py: Float, pz: Float) -> Self {
        Self { fx, fy, fz, px, py, pz }
    }

    pub fn force_vector(&self) -> SpatialVector {
        SpatialVector::new(self.fx, self.fy, self.fz)
    }

    pub fn point_of_application(&self) -> SpatialVector {
        SpatialVector::new(self.px, self.py, self.pz)
    }

    /// The moment of the force about the reference point
    pub fn moment_about(&self, reference_point: SpatialVector) -> SpatialVector {
        let rx = self.px - reference_point[0];
        let ry = self.py - reference_point[1];
        let rz = self.pz - reference_point[2];

        SpatialVector::new(
            ry * self.fz - rz * self.fy,
            rz * self.fx - rx * self.fz,
            rx * self.fy - ry * self.fx,
        )
    }

    /// The same force seen from the opposite tack.
    pub fn mirrored(&self) -> Self {
        Self {
            fy: -self.fy,
            py: -self.py,
            ..*self
        }
    }
}
