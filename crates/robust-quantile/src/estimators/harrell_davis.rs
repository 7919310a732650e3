//! Harrell-Davis quantile estimator
//!
//! Harrell, F.E. and Davis, C.E. (1982). "A new distribution-free quantile
//! estimator." Biometrika, 69(3), 635-640.

use crate::beta::{BetaCdf, RegularizedBeta};
use crate::confidence::standard_error_estimator;
use crate::kernels::{self, Moments};
use crate::traits::{
    QuantileConfidenceIntervalEstimator, QuantileEstimator, QuantileWithMoments,
    WeightedQuantileEstimator,
};
use crate::{Error, Result};
use robust_confidence::{ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel};
use robust_core::{CentralTendencyEstimator, SortedSample, SparseWeights};
use tracing::instrument;

/// Harrell-Davis quantile estimator
///
/// This estimator provides smooth quantile estimates as a weighted average of
/// all order statistics, with weights taken from a beta kernel over the
/// empirical cumulative weight. Weighted samples are supported.
///
/// The estimator holds no mutable state; the default instance is zero-sized
/// and can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarrellDavis<B = RegularizedBeta> {
    beta: B,
}

impl HarrellDavis {
    /// Create an estimator backed by [`RegularizedBeta`]
    pub const fn new() -> Self {
        Self {
            beta: RegularizedBeta,
        }
    }
}

impl<B: BetaCdf> HarrellDavis<B> {
    /// Create an estimator with a custom beta CDF evaluator
    pub fn with_beta_cdf(beta: B) -> Self {
        Self { beta }
    }

    /// The beta CDF evaluator in use
    pub fn beta_cdf(&self) -> &B {
        &self.beta
    }

    /// Non-zero kernel weights the estimate at `p` assigns to each order statistic
    pub fn weights<S: SortedSample + ?Sized>(&self, sample: &S, p: f64) -> Result<SparseWeights> {
        validate(sample, p)?;
        Ok(kernels::hd_weights(sample, p, &self.beta))
    }

    /// Estimate at `p` together with its Maritz-Jarrett interval at `level`
    pub fn quantile_confidence_interval<S: SortedSample + ?Sized>(
        &self,
        sample: &S,
        p: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        Ok(self
            .quantile_ci_estimator(sample, p)?
            .confidence_interval(level)?)
    }

    fn checked_moments<S: SortedSample + ?Sized>(
        &self,
        sample: &S,
        p: f64,
        need_c2: bool,
    ) -> Result<Moments> {
        validate(sample, p)?;
        Ok(kernels::moments(sample, p, need_c2, &self.beta))
    }
}

/// Convenience constructor for Harrell-Davis estimator
pub const fn harrell_davis() -> HarrellDavis {
    HarrellDavis::new()
}

/// Check that a sample and probability can be fed to the kernel
///
/// Checks run in a fixed order so the first problem found is the one
/// reported: emptiness, value/weight alignment, the probability, each
/// weight, then the total weight.
pub fn validate<S: SortedSample + ?Sized>(sample: &S, p: f64) -> Result<()> {
    validate_layout(sample)?;
    Error::check_probability(p)?;
    validate_weights(sample)
}

fn validate_layout<S: SortedSample + ?Sized>(sample: &S) -> Result<()> {
    let values = sample.sorted_values();
    let weights = sample.sorted_weights();
    if values.is_empty() {
        return Err(Error::EmptyData);
    }
    if values.len() != weights.len() {
        return Err(Error::LengthMismatch {
            values: values.len(),
            weights: weights.len(),
        });
    }
    Ok(())
}

fn validate_weights<S: SortedSample + ?Sized>(sample: &S) -> Result<()> {
    if let Some((index, &weight)) = sample
        .sorted_weights()
        .iter()
        .enumerate()
        .find(|(_, w)| w.is_nan() || **w < 0.0)
    {
        return Err(Error::NegativeWeight { index, weight });
    }
    let total = sample.total_weight();
    if !(total.is_finite() && total > 0.0) {
        return Err(Error::NonPositiveTotalWeight { total });
    }
    Ok(())
}

impl<B: BetaCdf> QuantileEstimator for HarrellDavis<B> {
    fn quantile<S: SortedSample + ?Sized>(&self, sample: &S, p: f64) -> Result<f64> {
        Ok(self.checked_moments(sample, p, false)?.c1)
    }

    #[instrument(skip_all, fields(n = sample.count(), quantiles = ps.len()))]
    fn quantiles<S: SortedSample + ?Sized>(&self, sample: &S, ps: &[f64]) -> Result<Vec<f64>> {
        validate_layout(sample)?;
        for &p in ps {
            Error::check_probability(p)?;
        }
        validate_weights(sample)?;
        Ok(self.evaluate_batch(sample, ps))
    }

    fn supports_weighted_samples(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Harrell-Davis"
    }
}

impl<B: BetaCdf> HarrellDavis<B> {
    #[cfg(not(feature = "parallel"))]
    fn evaluate_batch<S: SortedSample + ?Sized>(&self, sample: &S, ps: &[f64]) -> Vec<f64> {
        ps.iter()
            .map(|&p| kernels::moments(sample, p, false, &self.beta).c1)
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_batch<S: SortedSample + ?Sized>(&self, sample: &S, ps: &[f64]) -> Vec<f64> {
        use rayon::prelude::*;

        let slices = SortedSlices {
            values: sample.sorted_values(),
            weights: sample.sorted_weights(),
            total_weight: sample.total_weight(),
            weighted: sample.is_weighted(),
        };
        ps.par_iter()
            .map(|&p| kernels::moments(&slices, p, false, &self.beta).c1)
            .collect()
    }
}

/// Thread-shareable borrow of an already validated sample
#[cfg(feature = "parallel")]
struct SortedSlices<'a> {
    values: &'a [f64],
    weights: &'a [f64],
    total_weight: f64,
    weighted: bool,
}

#[cfg(feature = "parallel")]
impl SortedSample for SortedSlices<'_> {
    fn sorted_values(&self) -> &[f64] {
        self.values
    }

    fn sorted_weights(&self) -> &[f64] {
        self.weights
    }

    fn total_weight(&self) -> f64 {
        self.total_weight
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }
}

impl<B: BetaCdf> QuantileWithMoments for HarrellDavis<B> {
    fn quantile_with_moments<S: SortedSample + ?Sized>(
        &self,
        sample: &S,
        p: f64,
    ) -> Result<Moments> {
        self.checked_moments(sample, p, true)
    }
}

impl<B: BetaCdf> QuantileConfidenceIntervalEstimator for HarrellDavis<B> {
    /// Maritz-Jarrett standard error of the Harrell-Davis estimate
    fn quantile_ci_estimator<S: SortedSample + ?Sized>(
        &self,
        sample: &S,
        p: f64,
    ) -> Result<ConfidenceIntervalEstimator> {
        let moments = self.checked_moments(sample, p, true)?;
        Ok(standard_error_estimator(sample.count(), &moments))
    }
}

impl<B: BetaCdf> WeightedQuantileEstimator for HarrellDavis<B> {}

impl<B: BetaCdf + Clone> CentralTendencyEstimator for HarrellDavis<B> {
    fn estimate<S: SortedSample + ?Sized>(&self, sample: &S) -> robust_core::Result<f64> {
        Ok(self.quantile(sample, 0.5)?)
    }

    fn name(&self) -> &str {
        "Harrell-Davis median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        // Every order statistic gets a positive weight, though the extremes decay fast
        0.0
    }
}
