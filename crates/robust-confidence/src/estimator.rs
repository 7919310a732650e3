//! Confidence intervals from a point estimate and its standard error
//!
//! Estimators that can quantify their own uncertainty (for example
//! Harrell-Davis quantiles through the Maritz-Jarrett method) package the
//! sample size, the estimate and its standard error into a
//! [`ConfidenceIntervalEstimator`]. Intervals for any confidence level are
//! then built from Student's t distribution with n - 1 degrees of freedom.

use crate::{ConfidenceInterval, ConfidenceLevel};
use robust_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::trace;

/// Point estimate with its standard error, ready to produce intervals
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceIntervalEstimator {
    /// Number of observations the estimate was computed from
    pub sample_size: usize,
    /// The point estimate (center of every interval)
    pub estimation: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
}

impl ConfidenceIntervalEstimator {
    /// Create a new estimator
    pub fn new(sample_size: usize, estimation: f64, standard_error: f64) -> Self {
        Self {
            sample_size,
            estimation,
            standard_error,
        }
    }

    /// Degrees of freedom of the t distribution used for critical values
    pub fn degrees_of_freedom(&self) -> f64 {
        self.sample_size.saturating_sub(1) as f64
    }

    /// Build a two-sided interval at the given confidence level
    ///
    /// A zero standard error yields the degenerate interval `[estimation, estimation]`
    /// regardless of the sample size.
    pub fn confidence_interval(&self, level: ConfidenceLevel) -> Result<ConfidenceInterval> {
        if self.standard_error == 0.0 {
            return Ok(ConfidenceInterval::new(
                self.estimation,
                self.estimation,
                self.estimation,
                level.value(),
            ));
        }
        let margin = self.standard_error * self.critical_value(level)?;
        trace!(
            n = self.sample_size,
            estimation = self.estimation,
            margin,
            "built confidence interval"
        );
        Ok(ConfidenceInterval::new(
            self.estimation - margin,
            self.estimation + margin,
            self.estimation,
            level.value(),
        ))
    }

    /// Two-sided critical value t_{n-1}(1 - alpha/2)
    pub fn critical_value(&self, level: ConfidenceLevel) -> Result<f64> {
        if self.sample_size < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: self.sample_size,
            });
        }
        let t_dist = StudentsT::new(0.0, 1.0, self.degrees_of_freedom()).map_err(|e| {
            Error::Computation(format!("Failed to create t-distribution: {}", e))
        })?;
        Ok(t_dist.inverse_cdf(1.0 - level.tail_probability()))
    }
}
