// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Interpolation of tabulated data, used for the sail coefficients, the windage reference areas
//! and the air properties.

pub mod pchip;
pub mod quadratic;
pub mod grid;

pub use pchip::PchipInterpolant;
pub use quadratic::QuadraticInterpolant;
pub use grid::GridInterpolant;

use stormath::type_aliases::Float;

use crate::error::Error;

/// Checks that the sample points can be used as an interpolation axis
pub(crate) fn check_axis(x: &[Float], min_nr_points: usize) -> Result<(), Error> {
    if x.len() < min_nr_points {
        return Err(Error::invalid_parameter(format!(
            "at least {} sample points are needed, got {}", min_nr_points, x.len()
        )));
    }

    for pair in x.windows(2) {
        // Written so that NaN values are rejected as well
        if !(pair[1] > pair[0]) {
            return Err(Error::invalid_parameter(
                "the sample points must be strictly increasing"
            ));
        }
    }

    Ok(())
}

#[inline(always)]
pub(crate) fn sign(value: Float) -> Float {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
