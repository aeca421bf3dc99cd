// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Functionality to represent the wind, as seen from the water and from the moving boat.

pub mod apparent;
pub mod true_wind;
pub mod condition;
pub mod state;
pub mod height_variation;
pub mod distribution;
pub mod environment;

use stormath::type_aliases::Float;

use crate::interpolation::sign;

/// The tack of a wind angle: 1 on starboard, -1 on port and 0 when the angle is exactly zero.
#[inline(always)]
pub fn tack_sign(angle: Float) -> Float {
    sign(angle)
}
