//! Deterministic size balancing along region boundaries.
//!
//! The normalizer repeatedly walks the grid in row-major order and moves
//! boundary cells from crowded places into less crowded neighbouring
//! places, but only when the move does not lengthen the cell's local
//! boundary. It works on a single grid and is independent of the
//! evolutionary loop; it is typically applied to a finished result.
//!
//! # Termination
//!
//! A move takes a cell from a place with `c` cells to one with `n < c - 1`
//! cells, which lowers the sum of squared place counts by at least 2.
//! The loop therefore always stops; [`NormalizeConfig::max_passes`] only
//! tightens the bound.

mod config;
mod runner;

pub use config::NormalizeConfig;
pub use runner::{normalize_sizes, swap_boundary, NormalizeResult};
