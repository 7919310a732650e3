//! Core traits for robust statistical estimation
//!
//! Algorithm-specific traits (like `QuantileEstimator`) are defined in their
//! respective crates and build on the ones here.

use crate::{Result, SortedSample};

/// Base trait for all central tendency estimators
///
/// Estimators that measure the "center" or "typical value" of a distribution.
/// A quantile estimator evaluated at p = 0.5 is one.
///
/// # Example
///
/// ```rust
/// use robust_core::{CentralTendencyEstimator, Error, Result, Sample, SortedSample};
///
/// #[derive(Clone)]
/// struct WeightedMean;
///
/// impl CentralTendencyEstimator for WeightedMean {
///     fn estimate<S: SortedSample + ?Sized>(&self, sample: &S) -> Result<f64> {
///         if sample.count() == 0 {
///             return Err(Error::empty_input());
///         }
///         let sum: f64 = sample
///             .sorted_values()
///             .iter()
///             .zip(sample.sorted_weights())
///             .map(|(x, w)| x * w)
///             .sum();
///         Ok(sum / sample.total_weight())
///     }
///
///     fn name(&self) -> &str { "WeightedMean" }
///     fn is_robust(&self) -> bool { false }
///     fn breakdown_point(&self) -> f64 { 0.0 }
/// }
///
/// let sample = Sample::weighted(vec![1.0, 3.0], vec![1.0, 3.0]).unwrap();
/// assert_eq!(WeightedMean.estimate(&sample).unwrap(), 2.5);
/// ```
pub trait CentralTendencyEstimator: Send + Sync + Clone {
    /// Estimate the central tendency of a sorted sample
    fn estimate<S: SortedSample + ?Sized>(&self, sample: &S) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}
