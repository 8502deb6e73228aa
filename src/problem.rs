//! Problem definition: the rectangle and the number of places to carve it into.

use crate::error::Error;
use crate::evolve::{fitness, Score, Weights};
use crate::grid::{disparity, edge_cut, Grid, Place};
use rand::Rng;

/// A `height x width` grid to be split into `places` regions.
///
/// # Examples
///
/// ```
/// use u_partition::PartitionProblem;
///
/// let problem = PartitionProblem::new(33, 33, 128);
/// assert!(problem.validate().is_ok());
/// assert_eq!(problem.target_share(), (8, 65));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionProblem {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    /// Number of places (labels `0..places`).
    pub places: usize,
}

impl PartitionProblem {
    /// Creates a problem definition. Call [`validate`](Self::validate)
    /// before handing it to a runner.
    pub fn new(height: usize, width: usize, places: usize) -> Self {
        Self {
            height,
            width,
            places,
        }
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.height * self.width
    }

    /// Checks that the dimensions and place count are usable.
    pub fn validate(&self) -> Result<(), Error> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::InvalidProblem(format!(
                "grid must be non-empty, got {}x{}",
                self.height, self.width
            )));
        }
        if self.places == 0 {
            return Err(Error::InvalidProblem("places must be at least 1".into()));
        }
        if self.places > self.cells() {
            return Err(Error::InvalidProblem(format!(
                "{} places exceed {} cells",
                self.places,
                self.cells()
            )));
        }
        Ok(())
    }

    /// Checks that `grid` fits this problem: same shape, labels in range.
    pub fn check_grid(&self, grid: &Grid) -> Result<(), Error> {
        grid.check_shape(self.height, self.width)?;
        grid.check_labels(self.places)
    }

    /// Cells each place would own in a perfect split, and the cells left over.
    pub fn target_share(&self) -> (usize, usize) {
        (self.cells() / self.places, self.cells() % self.places)
    }

    /// A grid with an independent uniform label in `0..places` per cell.
    pub fn random_grid<R: Rng>(&self, rng: &mut R) -> Grid {
        let mut grid = Grid::new(self.height, self.width);
        for row in 0..self.height {
            for col in 0..self.width {
                grid.set(row, col, rng.random_range(0..self.places));
            }
        }
        grid
    }

    /// A deterministic tiling into roughly square blocks, one place per block.
    ///
    /// Uses `x_splits = width / floor(width / sqrt(places))` block columns and
    /// `places / x_splits` block rows. Blocks past the last place (from
    /// uneven division) are clamped onto the last place.
    pub fn block_grid(&self) -> Grid {
        let (x_splits, y_splits) = self.splits();
        let block_w = (self.width / x_splits).max(1);
        let block_h = (self.height / y_splits).max(1);
        let last = self.places - 1;

        let mut grid = Grid::new(self.height, self.width);
        for row in 0..self.height {
            let block_row = (row / block_h).min(y_splits - 1);
            for col in 0..self.width {
                let block_col = (col / block_w).min(x_splits - 1);
                let place: Place = (block_row * x_splits + block_col).min(last);
                grid.set(row, col, place);
            }
        }
        grid
    }

    /// Block columns and rows used by [`block_grid`](Self::block_grid).
    pub fn splits(&self) -> (usize, usize) {
        let side = (self.width as f64 / (self.places as f64).sqrt()).floor() as usize;
        let x_splits = (self.width / side.max(1)).clamp(1, self.places);
        let y_splits = (self.places / x_splits).max(1);
        (x_splits, y_splits)
    }

    /// Disparity, edge-cut and weighted fitness of `grid`.
    pub fn score(&self, grid: &Grid, weights: Weights) -> Score {
        let disparity = disparity(grid, self.places);
        let edge_cut = edge_cut(grid);
        Score {
            disparity,
            edge_cut,
            fitness: fitness(disparity, edge_cut, weights),
        }
    }
}
