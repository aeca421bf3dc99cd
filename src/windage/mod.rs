// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Drag on the parts of the boat that are not sails, following ORC 2013 p. 44.
//!
//! Both models use the apparent wind of the upright boat. The heel angle only changes the
//! projected area and the point of application.

pub mod hull;
pub mod mast;
pub mod builder;

use stormath::type_aliases::Float;

use crate::error::Error;
use crate::wind::state::WindState;

/// Apparent wind angle and speed of the upright boat
pub(crate) fn upright_apparent_wind(wind_state: &WindState) -> Result<(Float, Float), Error> {
    let upright = wind_state.with_heel_angle(0.0);

    Ok((
        upright.apparent_wind_angle(false)?,
        upright.apparent_wind_speed(false)?,
    ))
}
