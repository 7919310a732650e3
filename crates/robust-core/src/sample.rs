//! Sorted, optionally weighted samples
//!
//! Quantile estimators walk a sample in ascending value order together with
//! the weight of each observation. [`SortedSample`] is the read-only view they
//! consume; [`Sample`] owns its data and sorts on construction, while
//! [`SampleView`] borrows slices the caller has already sorted.

use crate::{Error, Result};
use ordered_float::NotNan;

/// Read-only view of a sample in ascending value order
///
/// `sorted_values()[j]` and `sorted_weights()[j]` describe the same
/// observation. Implementations guarantee ascending values; estimators do not
/// re-sort.
pub trait SortedSample {
    /// Values in ascending order
    fn sorted_values(&self) -> &[f64];

    /// Weights aligned index-wise with [`sorted_values`](Self::sorted_values)
    fn sorted_weights(&self) -> &[f64];

    /// Sum of all weights
    fn total_weight(&self) -> f64;

    /// Whether the weights carry information beyond "every observation counts once"
    fn is_weighted(&self) -> bool;

    /// Number of observations
    fn count(&self) -> usize {
        self.sorted_values().len()
    }

    /// Smallest value
    fn min(&self) -> Option<f64> {
        self.sorted_values().first().copied()
    }

    /// Largest value
    fn max(&self) -> Option<f64> {
        self.sorted_values().last().copied()
    }
}

/// Owned sample, sorted on construction
///
/// # Examples
///
/// ```
/// use robust_core::{Sample, SortedSample};
///
/// let sample = Sample::new(vec![3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(sample.sorted_values(), &[1.0, 2.0, 3.0]);
/// assert_eq!(sample.total_weight(), 3.0);
///
/// let weighted = Sample::weighted(vec![10.0, 0.0], vec![3.0, 1.0]).unwrap();
/// assert_eq!(weighted.sorted_values(), &[0.0, 10.0]);
/// assert_eq!(weighted.sorted_weights(), &[1.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    values: Vec<f64>,
    weights: Vec<f64>,
    total_weight: f64,
    weighted: bool,
}

impl Sample {
    /// Create an unweighted sample, sorting the values
    pub fn new(values: Vec<f64>) -> Result<Self> {
        let mut keys = finite_keys(&values)?;
        keys.sort_unstable();
        let values = keys.into_iter().map(NotNan::into_inner).collect();
        Ok(Self::unweighted_from_sorted(values))
    }

    /// Create an unweighted sample from values already in ascending order
    pub fn from_sorted(values: Vec<f64>) -> Result<Self> {
        let keys = finite_keys(&values)?;
        if let Some(j) = keys.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::InvalidArgument(format!(
                "values are not sorted: index {} ({}) > index {} ({})",
                j,
                values[j],
                j + 1,
                values[j + 1]
            )));
        }
        Ok(Self::unweighted_from_sorted(values))
    }

    /// Create a weighted sample, sorting (value, weight) pairs by value
    ///
    /// Observations with equal values keep their relative order.
    pub fn weighted(values: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::size_mismatch(values.len(), weights.len(), "sample weights"));
        }
        let keys = finite_keys(&values)?;
        let total_weight = validate_weights(&weights)?;

        let mut pairs: Vec<(NotNan<f64>, f64)> = keys.into_iter().zip(weights).collect();
        pairs.sort_by_key(|(value, _)| *value);
        let (values, weights): (Vec<f64>, Vec<f64>) = pairs
            .into_iter()
            .map(|(value, weight)| (value.into_inner(), weight))
            .unzip();

        log::debug!(
            "Built weighted sample: n={}, total_weight={}",
            values.len(),
            total_weight
        );
        Ok(Self {
            values,
            weights,
            total_weight,
            weighted: true,
        })
    }

    /// Borrow this sample as a [`SampleView`]
    pub fn view(&self) -> SampleView<'_> {
        SampleView {
            values: &self.values,
            weights: &self.weights,
            total_weight: self.total_weight,
            weighted: self.weighted,
        }
    }

    fn unweighted_from_sorted(values: Vec<f64>) -> Self {
        let n = values.len();
        log::debug!("Built unweighted sample: n={n}");
        Self {
            values,
            weights: vec![1.0; n],
            total_weight: n as f64,
            weighted: false,
        }
    }
}

impl SortedSample for Sample {
    fn sorted_values(&self) -> &[f64] {
        &self.values
    }

    fn sorted_weights(&self) -> &[f64] {
        &self.weights
    }

    fn total_weight(&self) -> f64 {
        self.total_weight
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }
}

/// Borrowed view over caller-sorted values and their weights
///
/// Sortedness is the caller's responsibility; everything else is validated
/// the same way [`Sample::weighted`] validates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleView<'a> {
    values: &'a [f64],
    weights: &'a [f64],
    total_weight: f64,
    weighted: bool,
}

impl<'a> SampleView<'a> {
    /// Create a view over index-aligned, ascending-value slices
    pub fn new(sorted_values: &'a [f64], sorted_weights: &'a [f64]) -> Result<Self> {
        if sorted_values.len() != sorted_weights.len() {
            return Err(Error::size_mismatch(
                sorted_values.len(),
                sorted_weights.len(),
                "sample weights",
            ));
        }
        finite_keys(sorted_values)?;
        let total_weight = validate_weights(sorted_weights)?;
        Ok(Self {
            values: sorted_values,
            weights: sorted_weights,
            total_weight,
            weighted: true,
        })
    }
}

impl SortedSample for SampleView<'_> {
    fn sorted_values(&self) -> &[f64] {
        self.values
    }

    fn sorted_weights(&self) -> &[f64] {
        self.weights
    }

    fn total_weight(&self) -> f64 {
        self.total_weight
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }
}

fn finite_keys(values: &[f64]) -> Result<Vec<NotNan<f64>>> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    values
        .iter()
        .enumerate()
        .map(|(j, &v)| match NotNan::new(v) {
            Ok(key) if v.is_finite() => Ok(key),
            _ => Err(Error::non_finite_value(j, v)),
        })
        .collect()
}

/// Returns the total weight
fn validate_weights(weights: &[f64]) -> Result<f64> {
    if let Some((j, &w)) = weights.iter().enumerate().find(|(_, w)| w.is_nan() || **w < 0.0) {
        return Err(Error::invalid_weight(j, w));
    }
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(Error::non_positive_total_weight(total));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_new_sorts_values() {
        let sample = Sample::new(vec![3.0, -1.0, 0.0, -5.0, 2.0]).unwrap();
        assert_eq!(sample.sorted_values(), &[-5.0, -1.0, 0.0, 2.0, 3.0]);
        assert_eq!(sample.sorted_weights(), &[1.0; 5]);
        assert_eq!(sample.total_weight(), 5.0);
        assert_eq!(sample.count(), 5);
        assert!(!sample.is_weighted());
        assert_eq!(sample.min(), Some(-5.0));
        assert_eq!(sample.max(), Some(3.0));
    }

    #[test]
    fn test_weighted_keeps_pairs_aligned() {
        let sample = Sample::weighted(vec![5.0, 1.0, 3.0], vec![0.5, 2.0, 0.0]).unwrap();
        assert_eq!(sample.sorted_values(), &[1.0, 3.0, 5.0]);
        assert_eq!(sample.sorted_weights(), &[2.0, 0.0, 0.5]);
        assert_eq!(sample.total_weight(), 2.5);
        assert!(sample.is_weighted());
    }

    #[test]
    fn test_weighted_ties_are_stable() {
        let sample = Sample::weighted(vec![2.0, 1.0, 2.0], vec![1.0, 1.0, 4.0]).unwrap();
        assert_eq!(sample.sorted_values(), &[1.0, 2.0, 2.0]);
        assert_eq!(sample.sorted_weights(), &[1.0, 1.0, 4.0]);
    }

    #[test]
    fn test_from_sorted_rejects_unsorted() {
        assert!(Sample::from_sorted(vec![1.0, 2.0, 2.0, 3.0]).is_ok());
        let err = Sample::from_sorted(vec![1.0, 3.0, 2.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_empty_sample_is_domain_error() {
        let err = Sample::new(vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(matches!(err, Error::InsufficientData { expected: 1, actual: 0 }));
    }

    #[test]
    fn test_nan_value_rejected() {
        let err = Sample::new(vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_infinite_values_rejected() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = Sample::new(vec![1.0, bad, 2.0]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(err.to_string().contains("index 1"), "{err}");

            assert!(Sample::from_sorted(vec![0.0, bad]).is_err());
            assert!(Sample::weighted(vec![bad, 0.0], vec![1.0, 1.0]).is_err());

            let values = [0.0, 1.0, bad];
            let err = SampleView::new(&values, &[1.0; 3]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_invalid_weights() {
        let err = Sample::weighted(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Sample::weighted(vec![1.0, 2.0], vec![1.0, -0.1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = Sample::weighted(vec![1.0, 2.0], vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = Sample::weighted(vec![1.0, 2.0], vec![0.0, 0.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = Sample::weighted(vec![1.0, 2.0], vec![f64::INFINITY, 1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_view_matches_owned_sample() {
        let sample = Sample::weighted(vec![4.0, 2.0], vec![1.0, 3.0]).unwrap();
        let view = sample.view();
        assert_eq!(view.sorted_values(), sample.sorted_values());
        assert_eq!(view.sorted_weights(), sample.sorted_weights());
        assert_eq!(view.total_weight(), 4.0);

        let values = [1.0, 2.0, 3.0];
        let weights = [0.25, 0.25, 0.5];
        let view = SampleView::new(&values, &weights).unwrap();
        assert_eq!(view.count(), 3);
        assert_eq!(view.total_weight(), 1.0);
        assert!(view.is_weighted());
    }

    #[test]
    fn test_view_validation() {
        assert!(SampleView::new(&[], &[]).is_err());
        assert!(SampleView::new(&[1.0, 2.0], &[1.0]).is_err());
        assert!(SampleView::new(&[1.0, 2.0], &[1.0, -1.0]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_sample() {
        let sample = Sample::new(vec![2.0, 1.0]).unwrap();
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"values\":[1.0,2.0]"));
        assert!(json.contains("\"weighted\":false"));
    }
}
