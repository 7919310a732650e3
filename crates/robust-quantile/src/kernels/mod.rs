//! Quantile-specific kernel implementations

mod moments;

pub use moments::{hd_weights, moments, BetaIncrements, KernelShape, Moments};
