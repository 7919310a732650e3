//! Harrell-Davis quantile estimation with Maritz-Jarrett confidence intervals
//!
//! This crate re-exports the workspace members:
//!
//! - [`robust_core`]: samples, errors and shared estimator traits
//! - [`robust_quantile`]: the Harrell-Davis estimator and its kernel
//! - [`robust_confidence`]: confidence interval construction
//!
//! # Example
//!
//! ```rust
//! use hd_quantile::prelude::*;
//!
//! let sample = Sample::weighted(vec![0.0, 10.0], vec![1.0, 3.0]).unwrap();
//! let hd = harrell_davis();
//!
//! let median = hd.quantile(&sample, 0.5).unwrap();
//! assert!(median > 5.0 && median < 10.0);
//!
//! let ci = hd
//!     .quantile_ci_estimator(&sample, 0.5)
//!     .unwrap()
//!     .confidence_interval(ConfidenceLevel::NINETY)
//!     .unwrap();
//! assert!(ci.contains(median));
//! ```

pub use robust_confidence;
pub use robust_core;
pub use robust_quantile;

pub use robust_confidence::{ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel};
pub use robust_core::{Sample, SampleView, SortedSample};
pub use robust_quantile::{
    harrell_davis, DefaultQuantileEstimator, HarrellDavis, MaritzJarrett, Moments,
    QuantileConfidenceIntervalEstimator, QuantileEstimator, QuantileWithMoments,
    WeightedQuantileEstimator,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use robust_core::{CentralTendencyEstimator, Sample, SampleView, SortedSample};
    pub use robust_quantile::prelude::*;
}
