//! Robust confidence interval construction
//!
//! Estimators that know their own standard error hand it over as a
//! [`ConfidenceIntervalEstimator`], which turns it into a
//! [`ConfidenceInterval`] for any [`ConfidenceLevel`] using Student's t
//! distribution with n - 1 degrees of freedom.
//!
//! # Examples
//!
//! ```rust
//! use robust_confidence::{ConfidenceIntervalEstimator, ConfidenceLevel};
//!
//! // Sample of 10 observations, estimate 5.5 with standard error 0.9
//! let estimator = ConfidenceIntervalEstimator::new(10, 5.5, 0.9);
//! let ci = estimator.confidence_interval(ConfidenceLevel::NINETY_FIVE).unwrap();
//!
//! assert!(ci.contains(5.5));
//! println!("{ci}");
//! ```

mod estimator;
mod types;

// Re-exports
pub use estimator::ConfidenceIntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel};
