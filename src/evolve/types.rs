//! Scores and the weighted fitness function.

/// Trade-off weights between balance and compactness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// Multiplier on disparity.
    pub disparity: u64,
    /// Multiplier on edge-cut.
    pub cut: u64,
}

impl Weights {
    /// Creates a weight pair.
    pub fn new(disparity: u64, cut: u64) -> Self {
        Self { disparity, cut }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            disparity: 3,
            cut: 2,
        }
    }
}

/// Weighted sum `disparity * weights.disparity + edge_cut * weights.cut`.
///
/// Lower is better. Saturates instead of overflowing.
///
/// ```
/// use u_partition::evolve::{fitness, Weights};
///
/// assert_eq!(fitness(10, 4, Weights::new(3, 2)), 38);
/// ```
#[inline]
pub fn fitness(disparity: usize, edge_cut: usize, weights: Weights) -> u64 {
    (disparity as u64)
        .saturating_mul(weights.disparity)
        .saturating_add((edge_cut as u64).saturating_mul(weights.cut))
}

/// Metrics of one candidate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Size imbalance, see [`disparity`](crate::grid::disparity).
    pub disparity: usize,
    /// Boundary length, see [`edge_cut`](crate::grid::edge_cut).
    pub edge_cut: usize,
    /// Weighted combination of the two.
    pub fitness: u64,
}
