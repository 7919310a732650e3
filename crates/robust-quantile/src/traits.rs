//! Capability traits for quantile estimation
//!
//! Each capability is its own trait so an estimator advertises exactly what
//! it can do: a point estimate, its kernel moments, a standard error for
//! confidence intervals, or direct evaluation on raw weighted slices.

use crate::kernels::Moments;
use crate::Result;
use robust_confidence::ConfidenceIntervalEstimator;
use robust_core::{SampleView, SortedSample};

/// Main trait for quantile estimation
///
/// Samples are consumed in sorted order through [`SortedSample`]; estimators
/// never sort.
pub trait QuantileEstimator: Send + Sync {
    /// Estimate the `p`-quantile of a sample
    ///
    /// # Arguments
    /// * `sample` - The data sample, sorted with aligned weights
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile<S: SortedSample + ?Sized>(&self, sample: &S, p: f64) -> Result<f64>;

    /// Estimate multiple quantiles of the same sample
    ///
    /// Any invalid probability fails the whole batch.
    fn quantiles<S: SortedSample + ?Sized>(&self, sample: &S, ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile(sample, p)).collect()
    }

    /// Whether observation weights are honored
    fn supports_weighted_samples(&self) -> bool {
        false
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}

/// Estimators that expose the first two moments of their kernel
pub trait QuantileWithMoments: QuantileEstimator {
    /// Compute the quantile (C1) together with the second moment (C2)
    fn quantile_with_moments<S: SortedSample + ?Sized>(&self, sample: &S, p: f64)
        -> Result<Moments>;
}

/// Estimators that can quantify the uncertainty of their quantile estimates
pub trait QuantileConfidenceIntervalEstimator: QuantileEstimator {
    /// Point estimate and standard error, packaged for interval construction
    fn quantile_ci_estimator<S: SortedSample + ?Sized>(
        &self,
        sample: &S,
        p: f64,
    ) -> Result<ConfidenceIntervalEstimator>;
}

/// Estimators that accept raw, caller-sorted values with weights
pub trait WeightedQuantileEstimator: QuantileEstimator {
    /// Estimate the `p`-quantile from ascending values and their weights
    fn weighted_quantile(&self, sorted_values: &[f64], weights: &[f64], p: f64) -> Result<f64> {
        let view = SampleView::new(sorted_values, weights)?;
        self.quantile(&view, p)
    }
}
