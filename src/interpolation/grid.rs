// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use stormath::type_aliases::Float;
use stormath::interpolation::linear_interpolation;

use crate::error::Error;

use super::check_axis;

#[derive(Debug, Clone)]
/// Bilinear interpolation of values sampled on a rectilinear grid.
///
/// Points outside of the grid are clamped to the closest edge of the grid.
pub struct GridInterpolant {
    x_axis: Vec<Float>,
    y_axis: Vec<Float>,
    /// One row of values, sampled along the y axis, for each point on the x axis
    values: Vec<Vec<Float>>,
}

impl GridInterpolant {
    pub fn new(
        x_axis: Vec<Float>,
        y_axis: Vec<Float>,
        values: Vec<Vec<Float>>
    ) -> Result<Self, Error> {
        check_axis(&x_axis, 2)?;
        check_axis(&y_axis, 2)?;

        if values.len() != x_axis.len() {
            return Err(Error::invalid_parameter(format!(
                "expected {} rows of grid values, got {}", x_axis.len(), values.len()
            )));
        }

        if values.iter().any(|row| row.len() != y_axis.len()) {
            return Err(Error::invalid_parameter(format!(
                "every row of grid values must have {} entries", y_axis.len()
            )));
        }

        Ok(Self { x_axis, y_axis, values })
    }

    pub fn value(&self, x: Float, y: Float) -> Float {
        let x = clamp_to_axis(x, &self.x_axis);
        let y = clamp_to_axis(y, &self.y_axis);

        let values_along_x: Vec<Float> = self.values.iter().map(
            |row| linear_interpolation(y, &self.y_axis, row)
        ).collect();

        linear_interpolation(x, &self.x_axis, &values_along_x)
    }
}

fn clamp_to_axis(value: Float, axis: &[Float]) -> Float {
    value.max(axis[0]).min(axis[axis.len() - 1])
}
