//! Normalizer passes.

use super::config::NormalizeConfig;
use crate::error::Error;
use crate::grid::{local_edge_cut, Grid, Occupancy, Place};
use tracing::instrument;

/// Result of [`normalize_sizes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeResult {
    /// Scan passes performed.
    pub passes: usize,
    /// Cells relabelled over all passes.
    pub swaps: usize,
    /// Final cell count per place.
    pub counts: Vec<usize>,
    /// `false` only if the pass limit stopped the loop early.
    pub converged: bool,
}

/// One row-major scan moving boundary cells into smaller neighbouring places.
///
/// Returns 0 without scanning when `biggest` does not outnumber `smallest`.
/// Otherwise every cell with label `p` (count `c` at the time the cell is
/// visited) looks at its neighbours in the order up, down, left, right and
/// adopts the first neighbouring label `q` with
///
/// - `count(q) < c - 1`, so the move cannot overshoot, and
/// - `local_edge_cut(q) <= local_edge_cut(p)`, so the boundary does not grow.
///
/// Moves are applied immediately; later cells see the updated grid and
/// counts. Returns the number of cells relabelled.
pub fn swap_boundary(
    grid: &mut Grid,
    occupancy: &mut Occupancy,
    biggest: Place,
    smallest: Place,
) -> usize {
    if occupancy.count(biggest) <= occupancy.count(smallest) {
        return 0;
    }

    let mut changes = 0;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let current = grid.get(row, col);
            let current_count = occupancy.count(current);
            let current_cut = local_edge_cut(grid, row, col, current);

            let target = grid.neighbors(row, col).map(|(r, c)| grid.get(r, c)).find(|&q| {
                occupancy.count(q) + 1 < current_count
                    && local_edge_cut(grid, row, col, q) <= current_cut
            });

            if let Some(place) = target {
                grid.set(row, col, place);
                occupancy.transfer(current, place);
                changes += 1;
            }
        }
    }
    changes
}

/// Balances place sizes by repeated [`swap_boundary`] passes.
///
/// Each pass targets the current largest and smallest places (lowest index
/// on ties). Stops when the largest and smallest counts differ by at most
/// one, when a pass changes nothing, or when `config.max_passes` is reached.
///
/// Running it again on its own output changes nothing.
///
/// # Examples
///
/// ```
/// use u_partition::grid::Grid;
/// use u_partition::normalize::{normalize_sizes, NormalizeConfig};
///
/// let mut grid = Grid::from_rows(vec![vec![0, 0, 0, 1]]).unwrap();
/// let result = normalize_sizes(&mut grid, 2, &NormalizeConfig::default()).unwrap();
/// assert_eq!(grid.to_rows(), vec![vec![0, 0, 1, 1]]);
/// assert_eq!(result.counts, vec![2, 2]);
/// ```
#[instrument(
    level = "debug",
    skip(grid, config),
    fields(height = grid.height(), width = grid.width())
)]
pub fn normalize_sizes(
    grid: &mut Grid,
    places: usize,
    config: &NormalizeConfig,
) -> Result<NormalizeResult, Error> {
    config.validate().map_err(Error::InvalidConfig)?;
    if places == 0 {
        return Err(Error::InvalidProblem("places must be at least 1".into()));
    }
    grid.check_labels(places)?;

    let mut occupancy = Occupancy::from_grid(grid, places);
    let mut passes = 0;
    let mut swaps = 0;
    let mut converged = false;

    while let (Some(biggest), Some(smallest)) = (occupancy.largest(), occupancy.smallest()) {
        if occupancy.count(biggest) <= occupancy.count(smallest) + 1 {
            converged = true;
            break;
        }
        if config.max_passes.is_some_and(|max| passes >= max) {
            break;
        }

        let changes = swap_boundary(grid, &mut occupancy, biggest, smallest);
        passes += 1;
        swaps += changes;
        tracing::debug!(pass = passes, changes, counts = ?occupancy.counts(), "normalize pass");

        if changes == 0 {
            converged = true;
            break;
        }
    }

    debug_assert_eq!(occupancy.total(), grid.len());
    Ok(NormalizeResult {
        passes,
        swaps,
        counts: occupancy.counts().to_vec(),
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{disparity, edge_cut};
    use crate::problem::PartitionProblem;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn grid(rows: Vec<Vec<Place>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn normalize(g: &mut Grid, places: usize) -> NormalizeResult {
        normalize_sizes(g, places, &NormalizeConfig::default()).unwrap()
    }

    #[test]
    fn test_balanced_grid_untouched() {
        let mut g = grid(vec![vec![0, 0, 1, 1]]);
        let result = normalize(&mut g, 2);
        assert_eq!(result.passes, 0);
        assert_eq!(result.swaps, 0);
        assert!(result.converged);
        assert_eq!(g, grid(vec![vec![0, 0, 1, 1]]));
    }

    #[test]
    fn test_moves_boundary_cell() {
        let mut g = grid(vec![vec![0, 0, 0, 1]]);
        let result = normalize(&mut g, 2);
        assert_eq!(g, grid(vec![vec![0, 0, 1, 1]]));
        assert_eq!(result.passes, 1);
        assert_eq!(result.swaps, 1);
        assert_eq!(result.counts, vec![2, 2]);
    }

    #[test]
    fn test_refuses_to_lengthen_boundary() {
        let before = grid(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]);
        let mut g = before.clone();
        let result = normalize(&mut g, 2);
        assert_eq!(g, before);
        assert_eq!(result.passes, 1);
        assert_eq!(result.swaps, 0);
        assert!(result.converged);
    }

    #[test]
    fn test_swap_boundary_noop_when_sizes_equal() {
        let mut g = grid(vec![vec![0, 1], vec![1, 0]]);
        let mut occ = Occupancy::from_grid(&g, 2);
        assert_eq!(swap_boundary(&mut g, &mut occ, 0, 1), 0);
    }

    #[test]
    fn test_mid_scan_updates_are_visible() {
        // Place 1 grows right one cell at a time within a single pass.
        let mut g = grid(vec![vec![1, 0, 0, 0, 0, 0]]);
        let mut occ = Occupancy::from_grid(&g, 2);
        let changes = swap_boundary(&mut g, &mut occ, 0, 1);
        assert_eq!(changes, 2);
        assert_eq!(g, grid(vec![vec![1, 1, 1, 0, 0, 0]]));
        assert_eq!(occ.counts(), &[3, 3]);
    }

    #[test]
    fn test_missing_place_gets_no_cells() {
        // Place 2 has no cell to grow from, so it stays empty.
        let mut g = grid(vec![vec![0, 0, 0, 0], vec![1, 1, 1, 1]]);
        let result = normalize(&mut g, 3);
        assert_eq!(result.counts[2], 0);
        assert!(result.converged);
    }

    #[test]
    fn test_single_place_terminates() {
        let mut g = Grid::filled(4, 4, 0);
        let result = normalize(&mut g, 1);
        assert_eq!(result.passes, 0);
        assert!(result.converged);
    }

    #[test]
    fn test_max_passes_stops_early() {
        let mut g = grid(vec![vec![0, 0, 0, 0, 0, 0, 0, 1]]);
        let config = NormalizeConfig::default().with_max_passes(1);
        let result = normalize_sizes(&mut g, 2, &config).unwrap();
        assert_eq!(result.passes, 1);
        assert!(!result.converged);
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        let mut g = grid(vec![vec![0, 3]]);
        let err = normalize_sizes(&mut g, 2, &NormalizeConfig::default()).unwrap_err();
        assert!(matches!(err, Error::LabelOutOfRange { label: 3, .. }));
    }

    #[test]
    fn test_random_grid_improves_balance() {
        let problem = PartitionProblem::new(12, 12, 6);
        let mut g = problem.random_grid(&mut create_rng(42));
        let before_cut = edge_cut(&g);
        let before = disparity(&g, problem.places);

        normalize(&mut g, problem.places);

        assert!(edge_cut(&g) <= before_cut);
        assert!(disparity(&g, problem.places) <= before);
    }

    fn arb_case() -> impl Strategy<Value = (Grid, usize)> {
        (1usize..8, 1usize..8, 1usize..5).prop_flat_map(|(h, w, places)| {
            prop::collection::vec(0..places, h * w).prop_map(move |cells| {
                let rows = cells.chunks(w).map(<[Place]>::to_vec).collect();
                (Grid::from_rows(rows).unwrap(), places)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent((g, places) in arb_case()) {
            let mut once = g.clone();
            normalize(&mut once, places);
            let mut twice = once.clone();
            let second = normalize(&mut twice, places);
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(second.swaps, 0);
        }

        #[test]
        fn prop_normalize_never_lengthens_boundary((g, places) in arb_case()) {
            let before_cut = edge_cut(&g);
            let before = Occupancy::from_grid(&g, places);
            let mut after = g.clone();
            let result = normalize(&mut after, places);

            prop_assert!(edge_cut(&after) <= before_cut);
            prop_assert_eq!(result.counts.iter().sum::<usize>(), g.len());
            let occupancy_after = Occupancy::from_grid(&after, places);
            prop_assert_eq!(&result.counts[..], occupancy_after.counts());
            prop_assert!(occupancy_after.spread() <= before.spread());
            prop_assert!(result.converged);
        }
    }
}
