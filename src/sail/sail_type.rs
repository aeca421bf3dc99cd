// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// The sail archetypes with tabulated lift and drag coefficients.
///
/// The variants marked ORC 2013 use the coefficients published with the ORC VPP documentation.
/// The others are older IMS style curves.
pub enum SailType {
    #[serde(rename = "main")]
    Main,
    /// ORC 2013
    #[serde(rename = "main_high")]
    MainHigh,
    /// ORC 2013
    #[serde(rename = "main_low")]
    MainLow,
    #[serde(rename = "jib")]
    Jib,
    /// ORC 2013
    #[serde(rename = "jib_high")]
    JibHigh,
    /// ORC 2013
    #[serde(rename = "jib_low")]
    JibLow,
    #[serde(rename = "boomed_jib")]
    BoomedJib,
    #[serde(rename = "spinnaker", alias = "spi")]
    Spinnaker,
    /// Symmetric spinnaker, ORC 2013
    #[serde(rename = "S_spinnaker")]
    SymmetricSpinnaker,
    /// Asymmetric spinnaker tacked on the centreline, ORC 2013
    #[serde(rename = "A_spinnaker_on_centreline")]
    AsymmetricSpinnakerOnCentreline,
    /// Asymmetric spinnaker tacked on a pole, ORC 2013
    #[serde(rename = "A_spinnaker_on_pole")]
    AsymmetricSpinnakerOnPole,
    /// ORC 2013
    #[serde(rename = "code_zero")]
    CodeZero,
}

impl SailType {
    /// All the sail types, in declaration order
    pub const ALL: [SailType; 12] = [
        SailType::Main,
        SailType::MainHigh,
        SailType::MainLow,
        SailType::Jib,
        SailType::JibHigh,
        SailType::JibLow,
        SailType::BoomedJib,
        SailType::Spinnaker,
        SailType::SymmetricSpinnaker,
        SailType::AsymmetricSpinnakerOnCentreline,
        SailType::AsymmetricSpinnakerOnPole,
        SailType::CodeZero,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SailType::Main => "main",
            SailType::MainHigh => "main_high",
            SailType::MainLow => "main_low",
            SailType::Jib => "jib",
            SailType::JibHigh => "jib_high",
            SailType::JibLow => "jib_low",
            SailType::BoomedJib => "boomed_jib",
            SailType::Spinnaker => "spinnaker",
            SailType::SymmetricSpinnaker => "S_spinnaker",
            SailType::AsymmetricSpinnakerOnCentreline => "A_spinnaker_on_centreline",
            SailType::AsymmetricSpinnakerOnPole => "A_spinnaker_on_pole",
            SailType::CodeZero => "code_zero",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for SailType {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "spi" {
            return Ok(SailType::Spinnaker);
        }

        SailType::ALL.iter()
            .find(|sail_type| sail_type.name() == name)
            .copied()
            .ok_or_else(|| Error::UnknownSailType(name.to_string()))
    }
}

impl fmt::Display for SailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
