// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use stormath::type_aliases::Float;

use crate::error::Error;

use super::{check_axis, sign};

#[derive(Debug, Clone)]
/// Piecewise Cubic Hermite Interpolating Polynomial.
///
/// The derivatives at the sample points are chosen so that the interpolant preserves the shape of
/// the data: it is monotonic wherever the data is monotonic and it does not overshoot local
/// extrema. This avoids the ringing a global spline shows between widely spaced empirical samples.
///
/// The interpolant is never used for extrapolation. Outside of the sampled range it has no value.
pub struct PchipInterpolant {
    x: Vec<Float>,
    y: Vec<Float>,
    derivatives: Vec<Float>,
}

impl PchipInterpolant {
    pub fn new(x: &[Float], y: &[Float]) -> Result<Self, Error> {
        if x.len() != y.len() {
            return Err(Error::invalid_parameter(format!(
                "x and y must have the same length, got {} and {}", x.len(), y.len()
            )));
        }

        check_axis(x, 2)?;

        let derivatives = Self::derivatives(x, y);

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            derivatives,
        })
    }

    pub fn x_min(&self) -> Float {
        self.x[0]
    }

    pub fn x_max(&self) -> Float {
        self.x[self.x.len() - 1]
    }

    /// Returns the interpolated value, or `None` if `x` is outside of the sampled range
    pub fn value(&self, x: Float) -> Option<Float> {
        if !(x >= self.x_min() && x <= self.x_max()) {
            return None;
        }

        let n = self.x.len();

        let i = self.x.partition_point(|&x_i| x_i <= x).saturating_sub(1).min(n - 2);

        let h = self.x[i + 1] - self.x[i];
        let t = (x - self.x[i]) / h;

        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        Some(
            h00 * self.y[i] +
            h10 * h * self.derivatives[i] +
            h01 * self.y[i + 1] +
            h11 * h * self.derivatives[i + 1]
        )
    }

    /// Returns the interpolated value, and zero outside of the sampled range
    pub fn value_or_zero(&self, x: Float) -> Float {
        self.value(x).unwrap_or(0.0)
    }

    fn derivatives(x: &[Float], y: &[Float]) -> Vec<Float> {
        let n = x.len();

        let h: Vec<Float> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let slopes: Vec<Float> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

        if n == 2 {
            return vec![slopes[0], slopes[0]];
        }

        let mut derivatives = vec![0.0; n];

        for k in 1..n - 1 {
            let m_prev = slopes[k - 1];
            let m_next = slopes[k];

            let flat_or_extremum = sign(m_prev) != sign(m_next) || m_prev == 0.0 || m_next == 0.0;

            if !flat_or_extremum {
                let w1 = 2.0 * h[k] + h[k - 1];
                let w2 = h[k] + 2.0 * h[k - 1];

                let weighted_harmonic_mean = (w1 / m_prev + w2 / m_next) / (w1 + w2);

                derivatives[k] = 1.0 / weighted_harmonic_mean;
            }
        }

        derivatives[0] = Self::end_derivative(h[0], h[1], slopes[0], slopes[1]);
        derivatives[n - 1] = Self::end_derivative(h[n - 2], h[n - 3], slopes[n - 2], slopes[n - 3]);

        derivatives
    }

    /// Non-centred three point estimate of the derivative at an end point, limited so that the
    /// shape of the data is preserved
    fn end_derivative(h0: Float, h1: Float, m0: Float, m1: Float) -> Float {
        let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);

        if sign(d) != sign(m0) {
            0.0
        } else if sign(m0) != sign(m1) && d.abs() > 3.0 * m0.abs() {
            3.0 * m0
        } else {
            d
        }
    }
}
