//! Neighbour-adoption mutation.
//!
//! A mutation step picks a uniform random cell and relabels it with the
//! label of one of its 4-neighbours that currently differs, chosen
//! uniformly. Cells whose neighbours all agree with them cannot change;
//! hitting one counts as a skipped attempt instead of a retry that must
//! succeed.
//!
//! Because only boundary cells move, mutation never creates a label that
//! was not already adjacent; regions grow and shrink along their borders.

use crate::grid::{Grid, Place};
use rand::Rng;

/// Outcome of one [`mutate`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Cells relabelled.
    pub applied: usize,
    /// Attempts that landed on a cell with no differing neighbour.
    pub skipped: usize,
}

impl MutationOutcome {
    /// Adds the counts of `other` to `self`.
    pub fn absorb(&mut self, other: MutationOutcome) {
        self.applied += other.applied;
        self.skipped += other.skipped;
    }
}

/// Number of cells to relabel per candidate in generation `iteration`.
///
/// Grows by one every ten generations, starting at 2.
#[inline]
pub fn change_budget(iteration: usize) -> usize {
    iteration / 10 + 2
}

/// Relabels `(row, col)` with a uniformly chosen differing neighbour.
///
/// Returns the adopted label, or `None` if every neighbour already
/// matches the cell.
pub fn adopt_neighbor<R: Rng>(
    grid: &mut Grid,
    row: usize,
    col: usize,
    rng: &mut R,
) -> Option<Place> {
    let own = grid.get(row, col);
    let mut candidates = [0 as Place; 4];
    let mut n = 0;
    for (r, c) in grid.neighbors(row, col) {
        let label = grid.get(r, c);
        if label != own {
            candidates[n] = label;
            n += 1;
        }
    }
    if n == 0 {
        return None;
    }

    let place = candidates[rng.random_range(0..n)];
    grid.set(row, col, place);
    Some(place)
}

/// Performs up to `budget` neighbour adoptions on random cells.
///
/// Stops once `budget` cells have been relabelled, or after
/// `budget * max_attempts_per_change` attempts, whichever comes first.
/// A grid without any boundary is left untouched.
///
/// # Examples
///
/// ```
/// use u_partition::evolve::mutation::mutate;
/// use u_partition::grid::Grid;
/// use u_partition::random::create_rng;
///
/// let mut grid = Grid::from_rows(vec![vec![0, 0, 1, 1]]).unwrap();
/// let outcome = mutate(&mut grid, 1, 1_000, &mut create_rng(3));
/// assert_eq!(outcome.applied, 1);
/// ```
pub fn mutate<R: Rng>(
    grid: &mut Grid,
    budget: usize,
    max_attempts_per_change: usize,
    rng: &mut R,
) -> MutationOutcome {
    let mut outcome = MutationOutcome::default();
    if budget == 0 || grid.is_empty() || !grid.has_boundary() {
        return outcome;
    }

    let max_attempts = budget.saturating_mul(max_attempts_per_change);
    let (height, width) = (grid.height(), grid.width());
    let mut attempts = 0;
    while outcome.applied < budget && attempts < max_attempts {
        attempts += 1;
        let row = rng.random_range(0..height);
        let col = rng.random_range(0..width);
        match adopt_neighbor(grid, row, col, rng) {
            Some(_) => outcome.applied += 1,
            None => outcome.skipped += 1,
        }
    }

    if outcome.applied < budget {
        tracing::trace!(
            budget,
            applied = outcome.applied,
            skipped = outcome.skipped,
            "mutation attempt limit reached"
        );
    }
    outcome
}
