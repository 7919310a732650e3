//! Sparse weight vectors
//!
//! Kernel-based estimators assign a weight to every order statistic, but for
//! moderate and large samples most of those weights are zero. This
//! representation only stores non-zero weights and their indices.

/// Sparse representation of per-index weights
///
/// # Examples
///
/// ```
/// use robust_core::sparse::SparseWeights;
///
/// let indices = vec![1, 3, 7];
/// let weights = vec![0.2, 0.5, 0.3];
/// let sparse = SparseWeights::new(indices, weights, 10);
///
/// assert_eq!(sparse.get(1), 0.2);
/// assert_eq!(sparse.get(2), 0.0); // Not in sparse representation
/// assert!((sparse.sum() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseWeights {
    /// Indices of non-zero weights (sorted)
    pub indices: Vec<usize>,
    /// Values of non-zero weights (same length as indices)
    pub weights: Vec<f64>,
    /// Total number of elements (for validation)
    pub n: usize,
}

impl SparseWeights {
    /// Create new sparse weights
    ///
    /// # Panics
    /// - If indices and weights have different lengths
    /// - If any index is >= n
    pub fn new(indices: Vec<usize>, weights: Vec<f64>, n: usize) -> Self {
        assert_eq!(
            indices.len(),
            weights.len(),
            "Indices and weights must have same length"
        );
        for &idx in &indices {
            assert!(idx < n, "Index {idx} out of bounds for n={n}");
        }

        let mut sw = Self { indices, weights, n };
        sw.sort_by_index();
        sw
    }

    fn sort_by_index(&mut self) {
        if self.indices.windows(2).all(|w| w[0] < w[1]) {
            return;
        }
        let mut combined: Vec<_> = self.iter().collect();
        combined.sort_unstable_by_key(|(idx, _)| *idx);
        let (indices, weights): (Vec<usize>, Vec<f64>) = combined.into_iter().unzip();
        self.indices = indices;
        self.weights = weights;
    }

    /// Number of non-zero weights
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Check if empty (no non-zero weights)
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Total size (n)
    pub fn len(&self) -> usize {
        self.n
    }

    /// Sparsity ratio (fraction of zero weights)
    pub fn sparsity(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            1.0 - (self.nnz() as f64 / self.n as f64)
        }
    }

    /// Sum of the stored weights
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Check that the weights sum to `expected_sum` within `tolerance`
    pub fn validate_sum(&self, expected_sum: f64, tolerance: f64) -> bool {
        (self.sum() - expected_sum).abs() < tolerance
    }

    /// Get weight at index (0.0 if not in sparse representation)
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.weights[pos],
            Err(_) => 0.0,
        }
    }

    /// Check if index has non-zero weight
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Iterate over (index, weight) pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.weights.iter().copied())
    }

    /// Weighted sum of `data` under these weights
    ///
    /// # Panics
    /// If `data.len() != self.n`
    pub fn apply(&self, data: &[f64]) -> f64 {
        assert_eq!(
            data.len(),
            self.n,
            "Data length must match sparse weights dimension"
        );
        self.iter().map(|(idx, w)| w * data[idx]).sum()
    }
}
