//! Balance and boundary metrics.

use super::types::{Grid, Place};
use std::collections::BTreeMap;

/// Disparity added for every place that owns no cell at all.
pub const MISSING_PLACE_PENALTY: usize = 500;

/// Size imbalance of a labelling.
///
/// With `optimal = cells / places` (real-valued), returns
/// `sum |count(p) - optimal|` over all places, truncated to an integer, plus
/// [`MISSING_PLACE_PENALTY`] for every place in `0..places` that does not
/// occur. Labels outside `0..places` still contribute their deviation; they
/// are tallied separately, so memory follows the number of distinct labels.
///
/// # Examples
///
/// ```
/// use u_partition::grid::{disparity, Grid};
///
/// let grid = Grid::from_rows(vec![vec![0, 0, 1, 1]]).unwrap();
/// assert_eq!(disparity(&grid, 2), 0);
/// assert_eq!(disparity(&grid, 3), 500 + 2);
/// ```
pub fn disparity(grid: &Grid, places: usize) -> usize {
    let optimal = grid.len() as f64 / places as f64;
    let mut counts = vec![0usize; places];
    let mut stray: BTreeMap<Place, usize> = BTreeMap::new();
    for &p in grid.cells() {
        match counts.get_mut(p) {
            Some(count) => *count += 1,
            None => *stray.entry(p).or_default() += 1,
        }
    }

    let mut penalty = 0;
    let mut deviation = 0.0;
    for &count in counts.iter().chain(stray.values()) {
        if count == 0 {
            penalty += MISSING_PLACE_PENALTY;
        }
        deviation += (count as f64 - optimal).abs();
    }

    deviation as usize + penalty
}

/// Number of 4-adjacent cell pairs with different labels.
///
/// Every internal edge is counted once; there is no wraparound.
pub fn edge_cut(grid: &Grid) -> usize {
    let horizontal: usize = grid
        .rows()
        .map(|row| row.windows(2).filter(|pair| pair[0] != pair[1]).count())
        .sum();
    let cells = grid.cells();
    let vertical = cells
        .iter()
        .zip(cells.iter().skip(grid.width()))
        .filter(|(a, b)| a != b)
        .count();
    horizontal + vertical
}

/// Number of neighbours of `(row, col)` that would differ from `place` if
/// the cell held `place`.
///
/// The grid is not modified; the cell's current label is ignored.
#[inline]
pub fn local_edge_cut(grid: &Grid, row: usize, col: usize, place: Place) -> usize {
    grid.neighbors(row, col)
        .filter(|&(r, c)| grid.get(r, c) != place)
        .count()
}

/// Contribution of `(row, col)` to [`edge_cut`] under its current label.
#[inline]
pub fn cell_edge_cut(grid: &Grid, row: usize, col: usize) -> usize {
    local_edge_cut(grid, row, col, grid.get(row, col))
}
