//! Harrell-Davis moment kernel
//!
//! The estimate is a weighted sum over the order statistics. The weight of
//! the j-th one is the mass a Beta((n+1)p, (n+1)(1-p)) distribution puts
//! between the cumulative normalized sample weight before and after it:
//!
//! ```text
//! u_j = (w_0 + ... + w_j) / W
//! W_j = I_{u_j}(a, b) - I_{u_{j-1}}(a, b)
//! C1  = sum W_j x_j
//! C2  = sum W_j x_j^2
//! ```
//!
//! The spread `C2 - C1^2` is accumulated around an order statistic near the
//! estimate rather than recovered from the raw moments, which would lose it
//! entirely once `C1^2` dwarfs the variance.
//!
//! Unweighted samples put the breakpoints at j/n, which is the classical
//! estimator. The kernel weights telescope to `I_1 - I_0 = 1`, so C1 is a
//! convex combination of the sample values.

use crate::beta::BetaCdf;
use robust_core::{SortedSample, SparseWeights};
use tracing::trace;

/// Shape of the kernel over [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelShape {
    /// All mass on one order statistic: p = 0, p = 1, or a single observation
    PointMass(usize),
    /// Beta(a, b) with a, b > 0
    Beta { a: f64, b: f64 },
}

impl KernelShape {
    /// Kernel for a sample of `n` observations at probability `p` in [0, 1]
    pub fn new(n: usize, p: f64) -> Self {
        if n <= 1 || p == 0.0 {
            return Self::PointMass(0);
        }
        if p == 1.0 {
            return Self::PointMass(n - 1);
        }
        let n_plus_1 = (n + 1) as f64;
        Self::Beta {
            a: n_plus_1 * p,
            b: n_plus_1 * (1.0 - p),
        }
    }
}

/// First and (optionally) second moment of the kernel-weighted sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moments {
    /// First moment: the quantile estimate
    pub c1: f64,
    /// Second raw moment, if it was computed
    pub c2: Option<f64>,
    /// Kernel-weighted spread around the estimate, accumulated without
    /// going through `c2`. Present whenever `c2` is.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spread: Option<f64>,
}

impl Moments {
    /// Moments known only through their raw values
    pub fn from_raw(c1: f64, c2: Option<f64>) -> Self {
        Self { c1, c2, spread: None }
    }

    /// `c2 - c1^2`, clamped at zero
    ///
    /// Uses the accumulated spread when present and the raw difference
    /// otherwise. Cancellation can push either slightly negative when the
    /// kernel mass sits on nearly equal values. NaN is passed through.
    pub fn variance(&self) -> Option<f64> {
        let variance = match self.spread {
            Some(spread) => spread,
            None => self.c2? - self.c1 * self.c1,
        };
        if variance < 0.0 {
            tracing::debug!(c1 = self.c1, c2 = ?self.c2, variance, "clamping negative kernel variance to zero");
            Some(0.0)
        } else {
            Some(variance)
        }
    }

    /// Square root of [`variance`](Self::variance)
    pub fn standard_error(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }
}

/// Kernel weight of each order statistic, in ascending order
///
/// Yields exactly `n` weights. Rounding can make a CDF difference slightly
/// negative; such increments are clamped to zero. NaN increments (a CDF that
/// breaks its contract) are passed through.
pub struct BetaIncrements<'a, B: BetaCdf + ?Sized> {
    weights: &'a [f64],
    total_weight: f64,
    shape: KernelShape,
    cdf: &'a B,
    j: usize,
    cumulative: f64,
    cdf_left: f64,
}

impl<'a, B: BetaCdf + ?Sized> BetaIncrements<'a, B> {
    /// Increments for `sample` at probability `p`
    ///
    /// The sample is assumed to be non-empty with a positive total weight.
    pub fn new<S: SortedSample + ?Sized>(sample: &'a S, p: f64, cdf: &'a B) -> Self {
        let shape = KernelShape::new(sample.count(), p);
        trace!(n = sample.count(), p, ?shape, "harrell-davis kernel");
        Self {
            weights: sample.sorted_weights(),
            total_weight: sample.total_weight(),
            shape,
            cdf,
            j: 0,
            cumulative: 0.0,
            cdf_left: 0.0,
        }
    }

    /// The kernel these increments are drawn from
    pub fn shape(&self) -> KernelShape {
        self.shape
    }
}

impl<B: BetaCdf + ?Sized> Iterator for BetaIncrements<'_, B> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let n = self.weights.len();
        if self.j >= n {
            return None;
        }
        let j = self.j;
        self.j += 1;

        match self.shape {
            KernelShape::PointMass(index) => Some(if j == index { 1.0 } else { 0.0 }),
            KernelShape::Beta { a, b } => {
                self.cumulative = if j + 1 == n {
                    1.0
                } else {
                    self.cumulative + self.weights[j] / self.total_weight
                };
                let cdf_right = self.cdf.cdf(a, b, self.cumulative);
                let w = cdf_right - self.cdf_left;
                self.cdf_left = cdf_right;
                Some(if w < 0.0 { 0.0 } else { w })
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.weights.len().saturating_sub(self.j);
        (remaining, Some(remaining))
    }
}

impl<B: BetaCdf + ?Sized> ExactSizeIterator for BetaIncrements<'_, B> {}

/// Compute C1 and, when `need_c2` is set, C2 for `sample` at probability `p`
///
/// Performs no validation; callers check the sample and `p` first.
pub fn moments<S, B>(sample: &S, p: f64, need_c2: bool, cdf: &B) -> Moments
where
    S: SortedSample + ?Sized,
    B: BetaCdf + ?Sized,
{
    let values = sample.sorted_values();
    let increments = BetaIncrements::new(sample, p, cdf);

    if need_c2 {
        // A constant sample gives a spread of exactly zero
        let n = values.len();
        let pivot_index = ((n.saturating_sub(1) as f64) * p).round() as usize;
        let pivot = values.get(pivot_index.min(n.saturating_sub(1))).copied().unwrap_or(0.0);

        let (c1, s1, s2) = values
            .iter()
            .zip(increments)
            .fold((0.0, 0.0, 0.0), |(c1, s1, s2), (&x, w)| {
                let d = x - pivot;
                let wd = w * d;
                (c1 + w * x, s1 + wd, s2 + wd * d)
            });
        let spread = s2 - s1 * s1;
        Moments {
            c1,
            c2: Some(c1 * c1 + spread),
            spread: Some(spread),
        }
    } else {
        let c1 = values.iter().zip(increments).map(|(&x, w)| w * x).sum();
        Moments::from_raw(c1, None)
    }
}

/// Non-zero kernel weights for `sample` at probability `p`
///
/// Performs no validation; callers check the sample and `p` first.
pub fn hd_weights<S, B>(sample: &S, p: f64, cdf: &B) -> SparseWeights
where
    S: SortedSample + ?Sized,
    B: BetaCdf + ?Sized,
{
    let n = sample.count();
    let (indices, weights): (Vec<usize>, Vec<f64>) = BetaIncrements::new(sample, p, cdf)
        .enumerate()
        .filter(|&(_, w)| w != 0.0)
        .unzip();
    SparseWeights::new(indices, weights, n)
}
