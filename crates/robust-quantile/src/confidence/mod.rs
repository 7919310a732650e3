//! Confidence interval support for quantile estimation
//!
//! Harrell-Davis estimates carry their own standard error through the
//! Maritz-Jarrett method; intervals are then built by `robust-confidence`.

mod maritz_jarrett;

pub use maritz_jarrett::{standard_error_estimator, MaritzJarrett};
