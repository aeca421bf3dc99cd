// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

//! Statistical distribution of wind speeds, following a Weibull distribution.
//!
//! The scale (lambda) is linked to the average wind speed. Typical values are 3-4 m/s inland,
//! 4-5 m/s on average and 5-7 m/s at windy places near the coast. The shape (k) describes how
//! variable the wind is: small values mean very variable winds. Typical values are between 1.2
//! and 2.1, with an average around 1.65. Tropical trade winds can go as high as 3 or 4.

use rand::Rng;
use rand_distr::{Distribution, Weibull};
use serde::{Serialize, Deserialize};

use stormath::type_aliases::Float;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeibullDistribution {
    #[serde(default="WeibullDistribution::default_scale")]
    pub scale: Float,
    #[serde(default="WeibullDistribution::default_shape")]
    pub shape: Float,
}

impl Default for WeibullDistribution {
    fn default() -> Self {
        Self {
            scale: Self::default_scale(),
            shape: Self::default_shape(),
        }
    }
}

impl WeibullDistribution {
    pub fn default_scale() -> Float {1.0}
    pub fn default_shape() -> Float {1.65}

    pub fn new(scale: Float, shape: Float) -> Result<Self, Error> {
        if !(scale > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the scale of the Weibull distribution must be strictly positive, got {}", scale
            )));
        }

        if !(shape > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "the shape of the Weibull distribution must be strictly positive, got {}", shape
            )));
        }

        Ok(Self { scale, shape })
    }

    /// Probability density function
    pub fn pdf(&self, wind_speed: Float) -> Float {
        if wind_speed < 0.0 {
            return 0.0;
        }

        let x = wind_speed / self.scale;

        (self.shape / self.scale) * x.powf(self.shape - 1.0) * (-x.powf(self.shape)).exp()
    }

    /// Cumulative distribution function
    pub fn cdf(&self, wind_speed: Float) -> Float {
        if wind_speed < 0.0 {
            return 0.0;
        }

        1.0 - (-(wind_speed / self.scale).powf(self.shape)).exp()
    }

    pub fn mean(&self) -> Float {
        self.scale * libm::tgamma(1.0 + 1.0 / self.shape as f64) as Float
    }

    /// Draws wind speeds from the distribution
    pub fn random_samples<R: Rng>(
        &self,
        rng: &mut R,
        nr_samples: usize
    ) -> Result<Vec<Float>, Error> {
        let weibull = Weibull::new(self.scale, self.shape).map_err(
            |error| Error::invalid_parameter(format!("invalid Weibull distribution: {}", error))
        )?;

        Ok(weibull.sample_iter(rng).take(nr_samples).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_pdf_and_cdf() {
        let distribution = WeibullDistribution::default();

        assert_relative_eq!(distribution.pdf(1.0), 0.6070010779328798, max_relative = 1e-12);
        assert_relative_eq!(distribution.cdf(1.0), 0.6321205588285577, max_relative = 1e-12);

        assert_eq!(distribution.pdf(-1.0), 0.0);
        assert_eq!(distribution.cdf(-1.0), 0.0);

        for i in 1..100 {
            let wind_speed = i as Float;

            assert!(distribution.pdf(wind_speed) < distribution.cdf(wind_speed));
        }
    }

    #[test]
    fn test_mean() {
        assert_relative_eq!(WeibullDistribution::default().mean(), 0.8942122621661722, max_relative = 1e-10);

        // Exponential distribution
        assert_relative_eq!(WeibullDistribution::new(3.0, 1.0).unwrap().mean(), 3.0, max_relative = 1e-12);

        let epsilon = 1e-3;

        for i in 1..100 {
            let lower = WeibullDistribution::new(i as Float, 1.65).unwrap();
            let higher = WeibullDistribution::new(i as Float + epsilon, 1.65).unwrap();

            assert!(lower.mean() < higher.mean());
        }
    }

    #[test]
    fn test_wrong_parameters() {
        assert!(WeibullDistribution::new(0.0, 1.65).is_err());
        assert!(WeibullDistribution::new(4.0, -1.0).is_err());
    }

    #[test]
    fn test_random_samples_with_invalid_parameters() {
        let distribution = WeibullDistribution {
            scale: 4.5,
            shape: -1.0,
        };

        let mut rng = StdRng::seed_from_u64(7);

        assert!(matches!(
            distribution.random_samples(&mut rng, 10),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_random_samples_follow_the_mean() {
        let distribution = WeibullDistribution::new(4.5, 1.65).unwrap();

        let mut rng = StdRng::seed_from_u64(42);

        let samples = distribution.random_samples(&mut rng, 100_000).unwrap();

        assert_eq!(samples.len(), 100_000);
        assert!(samples.iter().all(|&v| v >= 0.0));

        let sample_mean = samples.iter().sum::<Float>() / samples.len() as Float;

        assert_relative_eq!(sample_mean, distribution.mean(), max_relative = 0.02);
    }
}
