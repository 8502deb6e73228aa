//! Per-place cell counts.

use super::types::{Grid, Place};
use std::cmp::Reverse;

/// Number of cells held by each place.
///
/// Built once from a grid snapshot, then kept in step with the grid via
/// [`transfer`](Occupancy::transfer) as cells are reassigned. The counts
/// always sum to the grid's cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    counts: Vec<usize>,
}

impl Occupancy {
    /// Counts the labels of `grid` for places `0..places`.
    ///
    /// # Panics
    /// Panics if the grid holds a label `>= places`.
    pub fn from_grid(grid: &Grid, places: usize) -> Self {
        let mut counts = vec![0; places];
        for &p in grid.cells() {
            counts[p] += 1;
        }
        Self { counts }
    }

    /// Cells currently held by `place`.
    #[inline]
    pub fn count(&self, place: Place) -> usize {
        self.counts[place]
    }

    /// All counts, indexed by place.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Records one cell moving from `from` to `to`.
    #[inline]
    pub fn transfer(&mut self, from: Place, to: Place) {
        self.counts[from] -= 1;
        self.counts[to] += 1;
    }

    /// Place with the most cells; the lowest index wins ties.
    pub fn largest(&self) -> Option<Place> {
        self.counts
            .iter()
            .enumerate()
            .min_by_key(|&(_, &count)| Reverse(count))
            .map(|(place, _)| place)
    }

    /// Place with the fewest cells; the lowest index wins ties.
    pub fn smallest(&self) -> Option<Place> {
        self.counts
            .iter()
            .enumerate()
            .min_by_key(|&(_, &count)| count)
            .map(|(place, _)| place)
    }

    /// Difference between the largest and smallest count.
    pub fn spread(&self) -> usize {
        match (self.largest(), self.smallest()) {
            (Some(hi), Some(lo)) => self.counts[hi] - self.counts[lo],
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_counts() {
        let grid = Grid::from_rows(vec![vec![0, 2, 2], vec![2, 1, 0]]).unwrap();
        let occ = Occupancy::from_grid(&grid, 4);
        assert_eq!(occ.counts(), &[2, 1, 3, 0]);
        assert_eq!(occ.total(), grid.len());
    }

    #[test]
    fn test_ties_pick_lowest_index() {
        let grid = Grid::from_rows(vec![vec![0, 1, 2, 2, 1, 3]]).unwrap();
        let occ = Occupancy::from_grid(&grid, 4);
        assert_eq!(occ.largest(), Some(1));
        assert_eq!(occ.smallest(), Some(0));
        assert_eq!(occ.spread(), 1);
    }

    #[test]
    fn test_transfer_keeps_total() {
        let grid = Grid::filled(3, 3, 0);
        let mut occ = Occupancy::from_grid(&grid, 2);
        occ.transfer(0, 1);
        occ.transfer(0, 1);
        assert_eq!(occ.counts(), &[7, 2]);
        assert_eq!(occ.total(), 9);
    }

    #[test]
    fn test_no_places() {
        let occ = Occupancy { counts: vec![] };
        assert_eq!(occ.largest(), None);
        assert_eq!(occ.spread(), 0);
    }
}
