// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use serde::{Serialize, Deserialize};

use crate::sail::builder::SailForceModelBuilder;
use crate::windage::builder::{HullWindageBuilder, MastWindageBuilder};

use super::CompleteAeroModel;

use crate::error::Error;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompleteAeroModelBuilder {
    sails: SailForceModelBuilder,
    hull: HullWindageBuilder,
    #[serde(default)]
    mast: Option<MastWindageBuilder>,
}

impl CompleteAeroModelBuilder {
    pub fn new(
        sails: SailForceModelBuilder,
        hull: HullWindageBuilder,
        mast: Option<MastWindageBuilder>
    ) -> Self {
        Self { sails, hull, mast }
    }

    pub fn from_json_string(json_string: &str) -> Result<Self, Error> {
        let builder = serde_json::from_str(json_string)?;

        Ok(builder)
    }

    pub fn from_json_file(file_path: &str) -> Result<Self, Error> {
        let json_string = std::fs::read_to_string(file_path)?;

        Self::from_json_string(&json_string)
    }

    pub fn build(&self) -> Result<CompleteAeroModel, Error> {
        let mast = match &self.mast {
            Some(mast) => Some(mast.build()?),
            None => None,
        };

        Ok(CompleteAeroModel {
            sails: self.sails.build()?,
            hull: self.hull.build()?,
            mast,
        })
    }
}
