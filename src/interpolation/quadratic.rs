// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use stormath::type_aliases::Float;

use crate::error::Error;

use super::check_axis;

#[derive(Debug, Clone, Copy)]
/// The quadratic polynomial passing exactly through three samples. This is the same curve as an
/// interpolating spline of degree two on three points, which has no interior knots.
pub struct QuadraticInterpolant {
    x: [Float; 3],
    y: [Float; 3],
}

impl QuadraticInterpolant {
    pub fn new(x: [Float; 3], y: [Float; 3]) -> Result<Self, Error> {
        check_axis(&x, 3)?;

        Ok(Self { x, y })
    }

    /// Evaluates the polynomial. Values outside of the sampled range are extrapolated.
    pub fn value(&self, x: Float) -> Float {
        let [x0, x1, x2] = self.x;
        let [y0, y1, y2] = self.y;

        let l0 = (x - x1) * (x - x2) / ((x0 - x1) * (x0 - x2));
        let l1 = (x - x0) * (x - x2) / ((x1 - x0) * (x1 - x2));
        let l2 = (x - x0) * (x - x1) / ((x2 - x0) * (x2 - x1));

        y0 * l0 + y1 * l1 + y2 * l2
    }
}
