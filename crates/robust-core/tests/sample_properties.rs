//! Property-based tests for sample construction

use proptest::prelude::*;
use robust_core::{ErrorKind, Sample, SampleView, SortedSample};

proptest! {
    // Property: construction sorts and keeps every value
    #[test]
    fn prop_new_sorts(values in prop::collection::vec(-1e6f64..1e6, 1..100)) {
        let sample = Sample::new(values.clone()).unwrap();
        let sorted = sample.sorted_values();

        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(sample.total_weight(), values.len() as f64);
        prop_assert!(!sample.is_weighted());

        let mut expected = values;
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(sorted, expected.as_slice());
    }

    // Property: weights follow their values through the sort
    #[test]
    fn prop_weighted_keeps_pairs(
        pairs in prop::collection::vec((-1e3f64..1e3, 0.0f64..10.0), 1..60)
            .prop_filter("needs positive total", |p| p.iter().any(|&(_, w)| w > 0.0))
    ) {
        let (values, weights): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();
        let sample = Sample::weighted(values, weights).unwrap();

        let mut remaining = pairs.clone();
        for (&x, &w) in sample.sorted_values().iter().zip(sample.sorted_weights()) {
            let pos = remaining.iter().position(|&(rx, rw)| rx == x && rw == w);
            prop_assert!(pos.is_some(), "pair ({}, {}) not in input", x, w);
            remaining.swap_remove(pos.unwrap());
        }
        prop_assert!(remaining.is_empty());
    }

    // Property: an already sorted sample is accepted as-is by every constructor
    #[test]
    fn prop_sorted_constructors_agree(values in prop::collection::vec(-1e3f64..1e3, 1..50)) {
        let mut sorted = values;
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let ones = vec![1.0; sorted.len()];

        let owned = Sample::from_sorted(sorted.clone()).unwrap();
        let view = SampleView::new(&sorted, &ones).unwrap();

        prop_assert_eq!(owned.sorted_values(), view.sorted_values());
        prop_assert_eq!(owned.total_weight(), view.total_weight());
        prop_assert_eq!(owned.min(), view.min());
        prop_assert_eq!(owned.max(), view.max());
    }
}

#[test]
fn test_rejections_carry_kinds() {
    assert_eq!(
        Sample::new(vec![]).unwrap_err().kind(),
        ErrorKind::Domain
    );
    assert_eq!(
        Sample::new(vec![1.0, f64::NAN]).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        Sample::from_sorted(vec![2.0, 1.0]).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        Sample::weighted(vec![1.0, 2.0], vec![1.0, -0.5]).unwrap_err().kind(),
        ErrorKind::Domain
    );
    assert_eq!(
        Sample::weighted(vec![1.0, 2.0], vec![0.0, 0.0]).unwrap_err().kind(),
        ErrorKind::Domain
    );
    assert_eq!(
        SampleView::new(&[1.0, 2.0], &[1.0, f64::INFINITY]).unwrap_err().kind(),
        ErrorKind::Domain
    );
}
