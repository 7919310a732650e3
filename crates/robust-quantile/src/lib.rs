//! Harrell-Davis quantile estimation
//!
//! This crate provides the Harrell-Davis quantile estimator for weighted and
//! unweighted samples, together with Maritz-Jarrett standard errors for
//! confidence intervals.
//!
//! # Features
//!
//! - **Harrell-Davis Quantile Estimator**: Smooth quantile estimation as a
//!   beta-kernel weighted average of all order statistics
//! - **Weighted Samples**: The kernel is laid over the cumulative normalized
//!   weight, so unit weights reproduce the classical estimator
//! - **Confidence Intervals**: Maritz-Jarrett standard errors from the
//!   kernel's second moment
//! - **Pluggable Beta CDF**: Swap the regularized incomplete beta evaluator
//!   through [`BetaCdf`]
//! - **Batch Processing**: Many probabilities over one sample, optionally in
//!   parallel with the `parallel` feature
//!
//! # Example
//!
//! ```rust
//! use robust_core::Sample;
//! use robust_quantile::{harrell_davis, ConfidenceLevel, QuantileEstimator};
//!
//! let hd = harrell_davis();
//! let sample = Sample::new(vec![5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
//!
//! // Estimate median
//! let median = hd.quantile(&sample, 0.5).unwrap();
//! assert!((median - 3.0).abs() < 1e-10);
//!
//! // Median with a 95% confidence interval
//! let ci = hd
//!     .quantile_confidence_interval(&sample, 0.5, ConfidenceLevel::NINETY_FIVE)
//!     .unwrap();
//! assert!(ci.contains(median));
//! ```

pub mod beta;
pub mod confidence;
pub mod error;
pub mod estimators;
pub mod kernels;
pub mod traits;

// Re-export main types
pub use beta::{regularized_incomplete_beta, BetaCdf, RegularizedBeta};
pub use error::{Error, Result};
pub use estimators::{harrell_davis, HarrellDavis};
pub use kernels::Moments;
pub use traits::{
    QuantileConfidenceIntervalEstimator, QuantileEstimator, QuantileWithMoments,
    WeightedQuantileEstimator,
};
// Re-export from robust-core
pub use robust_core::SparseWeights;

// Re-export confidence interval support
pub use confidence::MaritzJarrett;
pub use robust_confidence::{ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel};

/// Type alias for the common use case
pub type DefaultQuantileEstimator = HarrellDavis<RegularizedBeta>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        harrell_davis, ConfidenceLevel, Error, HarrellDavis, MaritzJarrett,
        QuantileConfidenceIntervalEstimator, QuantileEstimator, QuantileWithMoments, Result,
        WeightedQuantileEstimator,
    };
}
