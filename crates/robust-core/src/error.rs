//! Error types for robust statistical analysis
//!
//! Provides a unified error type for all robust-stats crates.

use thiserror::Error;

/// Broad classification of a failure
///
/// Crate-specific error types map onto these kinds so callers can react to
/// the category of a failure without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is structurally malformed (mismatched lengths, non-finite values, ...)
    InvalidArgument,
    /// The input is well-formed but outside the domain of the operation
    Domain,
    /// A numerical step failed after validation succeeded
    Computation,
}

/// Core error type for robust statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Structurally invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Argument outside the mathematical domain of the operation
    #[error("Domain error: {0}")]
    Domain(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Domain(_) | Self::InsufficientData { .. } => ErrorKind::Domain,
            Self::Computation(_) => ErrorKind::Computation,
        }
    }

    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidArgument(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a NaN or infinite value at `index`
    pub fn non_finite_value(index: usize, value: f64) -> Self {
        Self::InvalidArgument(format!("value {value} at index {index} is not finite"))
    }

    /// Create an error for a weight that is negative or NaN
    pub fn invalid_weight(index: usize, weight: f64) -> Self {
        Self::Domain(format!(
            "weight {weight} at index {index} must be non-negative"
        ))
    }

    /// Create an error for a total weight that is not strictly positive
    pub fn non_positive_total_weight(total: f64) -> Self {
        Self::Domain(format!("total weight {total} must be positive and finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("values and weights differ".to_string());
        assert_eq!(err.to_string(), "Invalid argument: values and weights differ");

        let err = Error::Domain("p out of range".to_string());
        assert_eq!(err.to_string(), "Domain error: p out of range");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 samples, got 5"
        );

        let err = Error::Computation("convergence failed".to_string());
        assert_eq!(err.to_string(), "Computation error: convergence failed");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::non_finite_value(3, f64::NAN).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::size_mismatch(4, 3, "weights").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::invalid_weight(0, -1.0).kind(), ErrorKind::Domain);
        assert_eq!(Error::non_positive_total_weight(0.0).kind(), ErrorKind::Domain);
        assert_eq!(Error::empty_input().kind(), ErrorKind::Domain);
        assert_eq!(
            Error::Computation("t quantile".into()).kind(),
            ErrorKind::Computation
        );
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::size_mismatch(100, 50, "weight vector");
        assert_eq!(
            err.to_string(),
            "Invalid argument: Size mismatch in weight vector: expected 100, got 50"
        );

        let err = Error::invalid_weight(2, -0.5);
        assert_eq!(
            err.to_string(),
            "Domain error: weight -0.5 at index 2 must be non-negative"
        );
    }
}
