//! Core traits and types for robust statistical analysis
//!
//! This crate holds what every estimator crate in the workspace shares:
//!
//! - [`Sample`] / [`SampleView`]: sorted, optionally weighted observations,
//!   consumed through the [`SortedSample`] trait
//! - [`SparseWeights`]: per-order-statistic weights with zeros elided
//! - [`Error`] / [`ErrorKind`]: the unified error type
//! - [`CentralTendencyEstimator`]: the base estimator trait
//!
//! # Example
//!
//! ```rust
//! use robust_core::{Sample, SortedSample};
//!
//! let sample = Sample::weighted(vec![3.0, 1.0, 2.0], vec![1.0, 2.0, 1.0]).unwrap();
//! assert_eq!(sample.sorted_values(), &[1.0, 2.0, 3.0]);
//! assert_eq!(sample.sorted_weights(), &[2.0, 1.0, 1.0]);
//! assert_eq!(sample.total_weight(), 4.0);
//! ```

pub mod error;
pub mod sample;
pub mod sparse;
pub mod traits;

// Re-export core types
pub use error::{Error, ErrorKind, Result};
pub use sample::{Sample, SampleView, SortedSample};
pub use sparse::SparseWeights;
pub use traits::CentralTendencyEstimator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CentralTendencyEstimator, Error, ErrorKind, Result, Sample, SampleView, SortedSample,
        SparseWeights,
    };
}
