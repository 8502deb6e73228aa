//! Place-labelled grids and the measurements taken on them.
//!
//! A [`Grid`] assigns every cell of a `height x width` rectangle one
//! [`Place`] label. The metrics in this module score how well a labelling
//! partitions the rectangle:
//!
//! - [`disparity`]: how far per-place cell counts stray from an equal share
//! - [`edge_cut`]: how many 4-adjacent cell pairs carry different labels
//! - [`local_edge_cut`]: the same count restricted to one cell, for a
//!   hypothetical label, without touching the grid
//!
//! [`Occupancy`] keeps per-place counts that can be updated incrementally
//! while cells are reassigned.

mod metrics;
mod occupancy;
mod render;
mod types;

pub use metrics::{
    cell_edge_cut, disparity, edge_cut, local_edge_cut, MISSING_PLACE_PENALTY,
};
pub use occupancy::Occupancy;
pub use render::label_digits;
pub use types::{Grid, Place};
