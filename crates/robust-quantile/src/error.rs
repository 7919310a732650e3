//! Error types for quantile estimation

use robust_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute quantile of empty data")]
    EmptyData,

    /// Values and weights are not index-aligned
    #[error("Sample has {values} values but {weights} weights")]
    LengthMismatch { values: usize, weights: usize },

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Negative (or NaN) observation weight
    #[error("Weight {weight} at index {index} must be non-negative")]
    NegativeWeight { index: usize, weight: f64 },

    /// Total weight that is zero, negative or not finite
    #[error("Total weight {total} must be positive and finite")]
    NonPositiveTotalWeight { total: f64 },

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] robust_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LengthMismatch { .. } => ErrorKind::InvalidArgument,
            Error::EmptyData
            | Error::InvalidProbability { .. }
            | Error::NegativeWeight { .. }
            | Error::NonPositiveTotalWeight { .. } => ErrorKind::Domain,
            Error::Core(e) => e.kind(),
        }
    }

    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }
}

impl From<Error> for robust_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(e) => e,
            Error::EmptyData => robust_core::Error::empty_input(),
            other => match other.kind() {
                ErrorKind::InvalidArgument => robust_core::Error::InvalidArgument(other.to_string()),
                ErrorKind::Domain => robust_core::Error::Domain(other.to_string()),
                ErrorKind::Computation => robust_core::Error::Computation(other.to_string()),
            },
        }
    }
}
