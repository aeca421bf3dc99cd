// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use stormath::type_aliases::Float;

use crate::error::Error;
use crate::force::Force;
use crate::interpolation::GridInterpolant;
use crate::wind::state::WindState;

use super::upright_apparent_wind;

/// Drag coefficient of the hull above the water line
pub const HULL_DRAG_COEFFICIENT: Float = 0.68;

const APPARENT_WIND_ANGLE_SAMPLES: [Float; 3] = [0.0, 90.0, 180.0];
const HEEL_ANGLE_SAMPLES: [Float; 10] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

#[derive(Debug, Clone)]
/// Windage of the hull.
///
/// The reference area is the frontal area of the freeboard for head and stern winds. For beam
/// winds it is the side area of the freeboard, increased by the deck area exposed as the boat
/// heels.
pub struct HullWindage {
    freeboard_average: Float,
    loa: Float,
    beam_max: Float,
    air_density: Float,
    reference_area: GridInterpolant,
}

impl HullWindage {
    /// All the input values must be strictly positive
    pub fn new(
        freeboard_average: Float,
        loa: Float,
        beam_max: Float,
        air_density: Float
    ) -> Result<Self, Error> {
        let named_values = [
            ("freeboard_average", freeboard_average),
            ("loa", loa),
            ("beam_max", beam_max),
            ("air_density", air_density),
        ];

        for (name, value) in named_values {
            if !(value > 0.0) {
                return Err(Error::invalid_parameter(format!(
                    "{} must be strictly positive, got {}", name, value
                )));
            }
        }

        let half_deck_area = loa * beam_max * 0.7 / 2.0;
        let side_area_upright = loa * freeboard_average;
        let frontal_area = freeboard_average * beam_max;

        let values = APPARENT_WIND_ANGLE_SAMPLES.iter().map(|&awa| {
            HEEL_ANGLE_SAMPLES.iter().map(|&heel: &Float| {
                if awa == 90.0 {
                    side_area_upright + half_deck_area * heel.to_radians().sin()
                } else {
                    frontal_area
                }
            }).collect()
        }).collect();

        let reference_area = GridInterpolant::new(
            APPARENT_WIND_ANGLE_SAMPLES.to_vec(),
            HEEL_ANGLE_SAMPLES.to_vec(),
            values
        )?;

        Ok(Self {
            freeboard_average,
            loa,
            beam_max,
            air_density,
            reference_area,
        })
    }

    pub fn freeboard_average(&self) -> Float {
        self.freeboard_average
    }

    pub fn loa(&self) -> Float {
        self.loa
    }

    pub fn beam_max(&self) -> Float {
        self.beam_max
    }

    pub fn air_density(&self) -> Float {
        self.air_density
    }

    /// Reference area, in m^2. Only the magnitude of the angles is used.
    pub fn reference_area(&self, apparent_wind_angle: Float, heel_angle: Float) -> Float {
        self.reference_area.value(apparent_wind_angle.abs(), heel_angle.abs())
    }

    pub fn force(&self, wind_state: &WindState) -> Result<Force, Error> {
        let (awa, aws) = upright_apparent_wind(wind_state)?;

        let heel = wind_state.heel_angle.to_radians();

        let z_ce = 0.66 * (self.freeboard_average + self.beam_max * heel.sin());

        let reference_area = self.reference_area(awa, wind_state.heel_angle);

        let drag = 0.5 * self.air_density * HULL_DRAG_COEFFICIENT * reference_area * aws.powi(2);

        let awa_radians = awa.to_radians();

        Ok(Force {
            fx: -drag * awa_radians.cos(),
            fy: drag * awa_radians.sin(),
            fz: 0.0,
            px: self.loa / 2.0,
            py: 0.0,
            pz: z_ce,
        })
    }
}

/// Hull windage for a single wind state, without keeping the model
pub fn windage_hull(
    wind_state: &WindState,
    freeboard_average: Float,
    loa: Float,
    beam_max: Float,
    air_density: Float,
) -> Result<Force, Error> {
    HullWindage::new(freeboard_average, loa, beam_max, air_density)?.force(wind_state)
}
