//! Maritz-Jarrett confidence intervals for Harrell-Davis quantiles
//!
//! Based on the method described in:
//! Maritz, J.S. and Jarrett, R.G. (1978). "A note on estimating the variance
//! of the sample median." Journal of the American Statistical Association.
//!
//! The kernel that produces a Harrell-Davis estimate also gives its second
//! moment for free, and `sqrt(C2 - C1^2)` estimates the standard error of
//! the quantile.

use crate::kernels::Moments;
use crate::traits::QuantileConfidenceIntervalEstimator;
use crate::Result;
use robust_confidence::{ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel};
use robust_core::SortedSample;

/// Package kernel moments as an interval builder
///
/// The standard error is `sqrt(max(C2 - C1^2, 0))`, taken from the kernel's
/// accumulated spread when available. Moments computed without
/// C2 carry no uncertainty information and give a NaN standard error.
pub fn standard_error_estimator(sample_size: usize, moments: &Moments) -> ConfidenceIntervalEstimator {
    ConfidenceIntervalEstimator::new(
        sample_size,
        moments.c1,
        moments.standard_error().unwrap_or(f64::NAN),
    )
}

/// Maritz-Jarrett confidence interval calculator
///
/// Pairs a quantile estimator that knows its own standard error with a
/// fixed confidence level.
#[derive(Debug, Clone, Copy)]
pub struct MaritzJarrett<E> {
    estimator: E,
    level: ConfidenceLevel,
}

impl<E: QuantileConfidenceIntervalEstimator> MaritzJarrett<E> {
    /// Create new Maritz-Jarrett calculator
    pub fn new(estimator: E, level: ConfidenceLevel) -> Self {
        Self { estimator, level }
    }

    /// The confidence level intervals are built at
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// The wrapped quantile estimator
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Compute the confidence interval for the `p`-quantile
    pub fn confidence_interval<S: SortedSample + ?Sized>(
        &self,
        sample: &S,
        p: f64,
    ) -> Result<ConfidenceInterval> {
        Ok(self
            .estimator
            .quantile_ci_estimator(sample, p)?
            .confidence_interval(self.level)?)
    }

    /// Compute confidence intervals for multiple quantiles of one sample
    pub fn confidence_intervals<S: SortedSample + ?Sized>(
        &self,
        sample: &S,
        ps: &[f64],
    ) -> Result<Vec<ConfidenceInterval>> {
        ps.iter()
            .map(|&p| self.confidence_interval(sample, p))
            .collect()
    }
}
