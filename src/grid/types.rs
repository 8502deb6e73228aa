//! The [`Grid`] buffer.

use crate::error::Error;

/// A place label. Valid labels for a run with `places` places are `0..places`.
pub type Place = usize;

/// A rectangular, row-major buffer of place labels.
///
/// Each grid owns its cells outright. Candidates in a population are
/// independent grids; copying one into another slot is an explicit
/// [`clone_from`](Clone::clone_from).
///
/// # Examples
///
/// ```
/// use u_partition::grid::Grid;
///
/// let grid = Grid::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(1, 0), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Place>,
}

impl Grid {
    /// Creates a `height x width` grid with every cell on place 0.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, 0)
    }

    /// Creates a `height x width` grid with every cell on `place`.
    pub fn filled(height: usize, width: usize, place: Place) -> Self {
        Self {
            height,
            width,
            cells: vec![place; height * width],
        }
    }

    /// Builds a grid from explicit rows.
    ///
    /// Fails on empty input or rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Place>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Label of the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Place {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Assigns `place` to the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, place: Place) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = place;
    }

    /// All labels in row-major order.
    pub fn cells(&self) -> &[Place] {
        &self.cells
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Place]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Copies the labels into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Place>> {
        self.rows().map(<[Place]>::to_vec).collect()
    }

    /// In-bounds 4-neighbours of `(row, col)` in the order up, down, left, right.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let up = (row > 0).then(|| (row - 1, col));
        let down = (row + 1 < self.height).then(|| (row + 1, col));
        let left = (col > 0).then(|| (row, col - 1));
        let right = (col + 1 < self.width).then(|| (row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// Returns `true` if at least two adjacent cells differ.
    ///
    /// A grid without boundaries cannot be mutated by neighbour adoption.
    pub fn has_boundary(&self) -> bool {
        let w = self.width;
        let horizontal = self
            .rows()
            .any(|row| row.windows(2).any(|pair| pair[0] != pair[1]));
        horizontal
            || self
                .cells
                .iter()
                .zip(self.cells.iter().skip(w))
                .any(|(a, b)| a != b)
    }

    /// Largest label present, if any.
    pub fn max_label(&self) -> Option<Place> {
        self.cells.iter().copied().max()
    }

    /// Checks that every label lies in `0..places`.
    ///
    /// Reports the first offending cell in row-major order.
    pub fn check_labels(&self, places: usize) -> Result<(), Error> {
        match self.cells.iter().position(|&p| p >= places) {
            Some(i) => Err(Error::LabelOutOfRange {
                row: i / self.width,
                col: i % self.width,
                label: self.cells[i],
                places,
            }),
            None => Ok(()),
        }
    }

    /// Checks that the grid is `height x width`.
    pub fn check_shape(&self, height: usize, width: usize) -> Result<(), Error> {
        if self.height == height && self.width == width {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                height,
                width,
                found_height: self.height,
                found_width: self.width,
            })
        }
    }
}
