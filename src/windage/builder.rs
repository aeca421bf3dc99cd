// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use serde::{Serialize, Deserialize};

use stormath::type_aliases::Float;

use crate::error::Error;
use crate::air::RHO_AIR_20C;

use super::hull::HullWindage;
use super::mast::MastWindage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HullWindageBuilder {
    /// Average freeboard height, in m
    pub freeboard_average: Float,
    /// Length over all, in m
    pub loa: Float,
    /// Maximum beam, in m
    pub beam_max: Float,
    #[serde(default="HullWindageBuilder::default_air_density")]
    pub air_density: Float,
}

impl HullWindageBuilder {
    pub fn default_air_density() -> Float {RHO_AIR_20C}

    pub fn from_json_string(json_string: &str) -> Result<Self, Error> {
        let builder = serde_json::from_str(json_string)?;

        Ok(builder)
    }

    pub fn from_json_file(file_path: &str) -> Result<Self, Error> {
        let json_string = std::fs::read_to_string(file_path)?;

        Self::from_json_string(&json_string)
    }

    pub fn build(&self) -> Result<HullWindage, Error> {
        HullWindage::new(self.freeboard_average, self.loa, self.beam_max, self.air_density)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Builder for the mast windage. The altitudes and areas are for the part of the mast that is
/// exposed to the wind.
pub struct MastWindageBuilder {
    pub x: Float,
    pub z_bottom: Float,
    pub z_top: Float,
    pub front_area: Float,
    pub side_area: Float,
    #[serde(default="MastWindageBuilder::default_air_density")]
    pub air_density: Float,
}

impl MastWindageBuilder {
    pub fn default_air_density() -> Float {RHO_AIR_20C}

    pub fn from_json_string(json_string: &str) -> Result<Self, Error> {
        let builder = serde_json::from_str(json_string)?;

        Ok(builder)
    }

    pub fn from_json_file(file_path: &str) -> Result<Self, Error> {
        let json_string = std::fs::read_to_string(file_path)?;

        Self::from_json_string(&json_string)
    }

    pub fn build(&self) -> Result<MastWindage, Error> {
        MastWindage::new(
            self.x,
            self.z_bottom,
            self.z_top,
            self.front_area,
            self.side_area,
            self.air_density,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hull_from_json() {
        let builder = HullWindageBuilder::from_json_string(
            r#"{"freeboard_average": 0.07, "loa": 1.0, "beam_max": 0.2}"#
        ).unwrap();

        assert_eq!(builder.air_density, RHO_AIR_20C);

        let hull = builder.build().unwrap();

        assert_eq!(hull.loa(), 1.0);
    }

    #[test]
    fn test_mast_from_json() {
        let builder = MastWindageBuilder::from_json_string(
            r#"{
                "x": 0.5,
                "z_bottom": 0.07,
                "z_top": 1.7,
                "front_area": 0.017,
                "side_area": 0.017,
                "air_density": 1.225
            }"#
        ).unwrap();

        let mast = builder.build().unwrap();

        assert_eq!(mast.air_density(), 1.225);
        assert_eq!(mast.upright_centre_of_effort_altitude(), 0.5 * (0.07 + 1.7));
    }

    #[test]
    fn test_build_validates() {
        let hull = HullWindageBuilder {
            freeboard_average: 0.07,
            loa: -1.0,
            beam_max: 0.2,
            air_density: RHO_AIR_20C,
        };

        assert!(matches!(hull.build(), Err(Error::InvalidParameter(_))));

        let mast = MastWindageBuilder {
            x: 0.5,
            z_bottom: 1.7,
            z_top: 1.7,
            front_area: 0.017,
            side_area: 0.017,
            air_density: RHO_AIR_20C,
        };

        assert!(mast.build().is_err());
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            HullWindageBuilder::from_json_string(
                r#"{"freeboard_average": 0.07, "loa": 1.0, "beam": 0.2}"#
            ),
            Err(Error::Json(_))
        ));
    }
}
