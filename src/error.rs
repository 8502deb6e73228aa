//! Error type shared by grid construction, problem validation and runners.

use crate::grid::Place;

/// Errors reported by this crate.
///
/// The optimization kernels themselves are total over well-formed input;
/// these variants come from the boundaries where input is checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) holds place {label}, but only {places} places exist")]
    LabelOutOfRange {
        row: usize,
        col: usize,
        label: Place,
        places: usize,
    },
    #[error("grid is {found_height}x{found_width}, expected {height}x{width}")]
    ShapeMismatch {
        height: usize,
        width: usize,
        found_height: usize,
        found_width: usize,
    },
    #[error("invalid problem: {0}")]
    InvalidProblem(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
