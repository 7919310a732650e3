//! Naive reference implementation of the Harrell-Davis estimator
//!
//! Intentionally simple and unoptimized: sorts its own copy of the data,
//! builds a `statrs` Beta distribution and walks every order statistic.
//! Used only to check the kernel against an independent formulation.
//! The `statrs` CDF loses accuracy at very large shapes, so large samples
//! are checked against exact symmetry in `estimator_properties.rs` instead.

use statrs::distribution::{Beta, ContinuousCDF};

/// Naive Harrell-Davis quantile estimator
pub struct NaiveHarrellDavis;

impl NaiveHarrellDavis {
    /// Compute a single quantile of an unweighted sample
    pub fn quantile(data: &[f64], p: f64) -> f64 {
        Self::quantile_with_moments(data, p).0
    }

    /// Compute the quantile (C1) and second moment (C2) of an unweighted sample
    pub fn quantile_with_moments(data: &[f64], p: f64) -> (f64, f64) {
        let weights = vec![1.0; data.len()];
        Self::weighted_quantile_with_moments(data, &weights, p)
    }

    /// Compute C1 and C2 of a weighted sample
    pub fn weighted_quantile_with_moments(data: &[f64], weights: &[f64], p: f64) -> (f64, f64) {
        assert!(!data.is_empty(), "Cannot compute quantile of empty data");
        assert_eq!(data.len(), weights.len());
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

        let mut pairs: Vec<(f64, f64)> = data.iter().copied().zip(weights.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        let n = pairs.len();

        // Special cases
        if n == 1 || p == 0.0 {
            let val = pairs[0].0;
            return (val, val * val);
        }
        if p == 1.0 {
            let val = pairs[n - 1].0;
            return (val, val * val);
        }

        let n_f = n as f64;
        let beta_dist = Beta::new((n_f + 1.0) * p, (n_f + 1.0) * (1.0 - p)).unwrap();
        let total: f64 = pairs.iter().map(|(_, w)| w).sum();

        let mut c1 = 0.0;
        let mut c2 = 0.0;
        let mut beta_cdf_right = 0.0;
        let mut cumulative = 0.0;
        for (j, &(x, w)) in pairs.iter().enumerate() {
            let beta_cdf_left = beta_cdf_right;
            cumulative += w;
            let u = if j + 1 == n { 1.0 } else { (cumulative / total).min(1.0) };
            beta_cdf_right = beta_dist.cdf(u);
            let weight = beta_cdf_right - beta_cdf_left;
            c1 += weight * x;
            c2 += weight * x * x;
        }

        (c1, c2)
    }
}
