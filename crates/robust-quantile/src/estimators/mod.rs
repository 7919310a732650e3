//! Concrete quantile estimator implementations

mod harrell_davis;

pub use harrell_davis::{harrell_davis, validate, HarrellDavis};
