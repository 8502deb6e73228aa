//! Population-based local search over grid labellings.
//!
//! A population of `4 * gen_base` candidate grids starts as copies of one
//! seed grid. Each generation mutates every candidate except the previous
//! champion, scores all of them, then overwrites the non-elite slots with
//! copies of three winners:
//!
//! - the best weighted [`fitness`] (half of the copies)
//! - the best [`disparity`](crate::grid::disparity) (a quarter)
//! - the best [`edge_cut`](crate::grid::edge_cut) (a quarter)
//!
//! # Key Types
//!
//! - [`EvolveConfig`]: population scaling, generation count, weights, seed
//! - [`EvolveRunner`]: executes the loop
//! - [`EvolveResult`]: the best grid plus per-candidate and per-generation statistics
//!
//! # Submodules
//!
//! - [`mutation`]: the neighbour-adoption mutation operator

mod config;
pub mod mutation;
mod runner;
mod types;

pub use config::EvolveConfig;
pub use runner::{perform_iteration, EvolveResult, EvolveRunner, IterationReport};
pub use types::{fitness, Score, Weights};
