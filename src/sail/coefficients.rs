// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Lift and drag coefficients for each sail type, as a function of the apparent wind angle in
//! degrees.
//!
//! The coefficients are given as control points that are interpolated with monotone piecewise
//! cubic Hermite polynomials. Outside of the range of the control points, the coefficients are
//! zero. The interpolants are built once, the first time any of them is used.

use std::str::FromStr;

use once_cell::sync::Lazy;

use stormath::type_aliases::Float;

use crate::error::Error;
use crate::interpolation::PchipInterpolant;

use super::sail_type::SailType;

/// Control points for the lift and drag curves of a single sail type
#[derive(Debug, Clone, Copy)]
pub struct ControlPoints {
    pub lift_angles: &'static [Float],
    pub lift: &'static [Float],
    pub drag_angles: &'static [Float],
    pub drag: &'static [Float],
}

const MAIN_LIFT_ANGLES: [Float; 10] = [0.0, 12.0, 13.0, 15.0, 20.0, 30.0, 60.0, 90.0, 120.0, 170.0];
const MAIN_LIFT: [Float; 10] = [0.0, 1.45, 1.45, 1.45, 1.43, 1.40, 1.28, 0.90, 0.60, 0.0];
const MAIN_DRAG_ANGLES: [Float; 10] = [20.0, 60.0, 90.0, 120.0, 150.0, 176.0, 177.0, 178.0, 179.0, 180.0];
const MAIN_DRAG: [Float; 10] = [0.0, 0.10, 0.30, 0.66, 1.10, 1.20, 1.20, 1.20, 1.20, 1.20];

const MAIN_ORC_ANGLES: [Float; 10] = [0.0, 7.0, 9.0, 12.0, 28.0, 60.0, 90.0, 120.0, 150.0, 180.0];
const MAIN_HIGH_LIFT: [Float; 10] = [0.0, 0.948, 1.138, 1.250, 1.427, 1.269, 1.125, 0.838, 0.296, -0.112];
const MAIN_HIGH_DRAG: [Float; 10] = [0.034, 0.017, 0.015, 0.015, 0.026, 0.113, 0.383, 0.969, 1.316, 1.345];
const MAIN_LOW_LIFT: [Float; 10] = [0.0, 0.862, 1.052, 1.164, 1.347, 1.239, 1.125, 0.838, 0.296, -0.112];
const MAIN_LOW_DRAG: [Float; 10] = [0.043, 0.026, 0.023, 0.023, 0.033, 0.113, 0.383, 0.969, 1.316, 1.345];

const JIB_LIFT_ANGLES: [Float; 10] = [8.0, 19.0, 20.0, 21.0, 40.0, 50.0, 60.0, 80.0, 100.0, 150.0];
const JIB_LIFT: [Float; 10] = [0.0, 1.44, 1.45, 1.45, 1.43, 1.41, 1.25, 0.78, 0.40, 0.0];
const JIB_DRAG_ANGLES: [Float; 10] = [16.0, 28.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0, 180.0];
const JIB_DRAG: [Float; 10] = [0.0, 0.10, 0.20, 0.35, 0.56, 0.73, 0.83, 0.92, 0.96, 0.90];

const JIB_ORC_ANGLES: [Float; 9] = [7.0, 15.0, 20.0, 27.0, 50.0, 60.0, 100.0, 150.0, 180.0];
const JIB_HIGH_LIFT: [Float; 9] = [0.0, 1.1, 1.475, 1.5, 1.43, 1.25, 0.4, 0.0, -0.1];
const JIB_LOW_LIFT: [Float; 9] = [0.0, 1.0, 1.375, 1.45, 1.43, 1.25, 0.4, 0.0, -0.1];
const JIB_ORC_DRAG: [Float; 9] = [0.05, 0.032, 0.031, 0.037, 0.25, 0.35, 0.73, 0.95, 0.9];

const BOOMED_JIB_LIFT_ANGLES: [Float; 9] = [7.0, 15.0, 20.0, 27.0, 50.0, 60.0, 100.0, 160.0, 180.0];
const BOOMED_JIB_LIFT: [Float; 9] = [0.0, 1.0, 1.375, 1.45, 1.43, 1.25 * 1.05, 0.4 * 1.3, 0.0, -0.1];
const BOOMED_JIB_DRAG: [Float; 9] = [
    0.05, 0.032, 0.031, 0.037, 0.25, 0.35, 0.73 * 1.1, 0.95 * 1.2, 0.9 * 1.3
];

const SPINNAKER_ANGLES: [Float; 10] = [28.0, 41.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0, 170.0, 180.0];
const SPINNAKER_LIFT: [Float; 10] = [0.0, 1.15, 1.70, 1.62, 1.40, 1.00, 0.65, 0.32, 0.16, 0.0];
const SPINNAKER_DRAG: [Float; 10] = [0.10, 0.20, 0.43, 0.80, 1.00, 1.08, 1.12, 1.10, 1.10, 1.10];

const SPINNAKER_ORC_ANGLES: [Float; 11] = [28.0, 41.0, 50.0, 60.0, 67.0, 75.0, 100.0, 115.0, 130.0, 150.0, 180.0];
const S_SPINNAKER_LIFT: [Float; 11] = [0.0, 0.978, 1.241, 1.454, 1.456, 1.437, 1.190, 0.951, 0.706, 0.425, 0.0];
const S_SPINNAKER_DRAG: [Float; 11] = [0.213, 0.321, 0.425, 0.587, 0.598, 0.619, 0.850, 0.911, 0.935, 0.935, 0.935];
const A_SPINNAKER_CENTRELINE_LIFT: [Float; 11] = [
    0.026, 1.018, 1.277, 1.471, 1.513, 1.444, 1.137, 0.829, 0.560, 0.250, -0.120
];
const A_SPINNAKER_CENTRELINE_DRAG: [Float; 11] = [
    0.191, 0.280, 0.366, 0.523, 0.448, 0.556, 0.757, 0.790, 0.776, 0.620, 0.400
];
const A_SPINNAKER_POLE_LIFT: [Float; 11] = [
    0.085, 1.114, 1.360, 1.513, 1.548, 1.479, 1.207, 0.956, 0.706, 0.425, 0.0
];
const A_SPINNAKER_POLE_DRAG: [Float; 11] = [
    0.170, 0.238, 0.306, 0.459, 0.392, 0.493, 0.791, 0.894, 0.936, 0.936, 0.936
];

const CODE_ZERO_ANGLES: [Float; 11] = [7.0, 19.0, 26.0, 35.0, 42.0, 53.0, 70.0, 100.0, 120.0, 150.0, 180.0];
const CODE_ZERO_LIFT: [Float; 11] = [0.0, 1.0, 1.785, 2.15, 2.2, 1.9, 1.45, 0.8, 0.45, 0.15, -0.07];
const CODE_ZERO_DRAG: [Float; 11] = [0.065, 0.045, 0.065, 0.08, 0.14, 0.28, 0.47, 0.74, 0.85, 0.82, 0.72];

impl SailType {
    pub fn control_points(&self) -> ControlPoints {
        let (lift_angles, lift, drag_angles, drag): (
            &'static [Float], &'static [Float], &'static [Float], &'static [Float]
        ) = match self {
            SailType::Main => (&MAIN_LIFT_ANGLES, &MAIN_LIFT, &MAIN_DRAG_ANGLES, &MAIN_DRAG),
            SailType::MainHigh => (&MAIN_ORC_ANGLES, &MAIN_HIGH_LIFT, &MAIN_ORC_ANGLES, &MAIN_HIGH_DRAG),
            SailType::MainLow => (&MAIN_ORC_ANGLES, &MAIN_LOW_LIFT, &MAIN_ORC_ANGLES, &MAIN_LOW_DRAG),
            SailType::Jib => (&JIB_LIFT_ANGLES, &JIB_LIFT, &JIB_DRAG_ANGLES, &JIB_DRAG),
            SailType::JibHigh => (&JIB_ORC_ANGLES, &JIB_HIGH_LIFT, &JIB_ORC_ANGLES, &JIB_ORC_DRAG),
            SailType::JibLow => (&JIB_ORC_ANGLES, &JIB_LOW_LIFT, &JIB_ORC_ANGLES, &JIB_ORC_DRAG),
            SailType::BoomedJib => (
                &BOOMED_JIB_LIFT_ANGLES, &BOOMED_JIB_LIFT, &JIB_ORC_ANGLES, &BOOMED_JIB_DRAG
            ),
            SailType::Spinnaker => (
                &SPINNAKER_ANGLES, &SPINNAKER_LIFT, &SPINNAKER_ANGLES, &SPINNAKER_DRAG
            ),
            SailType::SymmetricSpinnaker => (
                &SPINNAKER_ORC_ANGLES, &S_SPINNAKER_LIFT, &SPINNAKER_ORC_ANGLES, &S_SPINNAKER_DRAG
            ),
            SailType::AsymmetricSpinnakerOnCentreline => (
                &SPINNAKER_ORC_ANGLES, &A_SPINNAKER_CENTRELINE_LIFT,
                &SPINNAKER_ORC_ANGLES, &A_SPINNAKER_CENTRELINE_DRAG
            ),
            SailType::AsymmetricSpinnakerOnPole => (
                &SPINNAKER_ORC_ANGLES, &A_SPINNAKER_POLE_LIFT,
                &SPINNAKER_ORC_ANGLES, &A_SPINNAKER_POLE_DRAG
            ),
            SailType::CodeZero => (
                &CODE_ZERO_ANGLES, &CODE_ZERO_LIFT, &CODE_ZERO_ANGLES, &CODE_ZERO_DRAG
            ),
        };

        ControlPoints { lift_angles, lift, drag_angles, drag }
    }

    /// The lift and drag interpolants for the sail type
    pub fn coefficients(&self) -> &'static SailCoefficients {
        &COEFFICIENT_TABLE[self.index()]
    }
}

#[derive(Debug, Clone)]
pub struct SailCoefficients {
    pub lift: PchipInterpolant,
    pub drag: PchipInterpolant,
}

impl SailCoefficients {
    pub fn from_control_points(control_points: &ControlPoints) -> Result<Self, Error> {
        Ok(Self {
            lift: PchipInterpolant::new(control_points.lift_angles, control_points.lift)?,
            drag: PchipInterpolant::new(control_points.drag_angles, control_points.drag)?,
        })
    }

    /// Lift and drag coefficients at the apparent wind angle, in degrees. Each coefficient is
    /// zero outside the range of its control points.
    pub fn value(&self, apparent_wind_angle: Float) -> (Float, Float) {
        (
            self.lift.value_or_zero(apparent_wind_angle),
            self.drag.value_or_zero(apparent_wind_angle),
        )
    }
}

static COEFFICIENT_TABLE: Lazy<Vec<SailCoefficients>> = Lazy::new(|| {
    SailType::ALL.iter().map(
        |sail_type| SailCoefficients::from_control_points(&sail_type.control_points())
            .expect("the tabulated sail coefficients have strictly increasing angles")
    ).collect()
});

/// Lift and drag coefficients for the sail type at the apparent wind angle, in degrees.
pub fn coefficient(sail_type: SailType, apparent_wind_angle: Float) -> (Float, Float) {
    sail_type.coefficients().value(apparent_wind_angle)
}

/// The interpolants for the sail type with the given name.
pub fn coefficient_interp(sail_name: &str) -> Result<&'static SailCoefficients, Error> {
    Ok(SailType::from_str(sail_name)?.coefficients())
}

pub fn coefficient_by_name(
    sail_name: &str,
    apparent_wind_angle: Float
) -> Result<(Float, Float), Error> {
    Ok(coefficient_interp(sail_name)?.value(apparent_wind_angle))
}
