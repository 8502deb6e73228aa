//! Balanced partitioning of rectangular grids into labelled places.
//!
//! Every cell of a `height x width` grid is assigned one of `places` labels.
//! A good labelling gives each place about the same number of cells
//! (low *disparity*) while keeping regions compact (short *edge-cut*, the
//! number of adjacent cell pairs with different labels).
//!
//! Two strategies are provided:
//!
//! - **Evolution** ([`evolve`]): a population of candidate grids is mutated
//!   along region boundaries and refilled each generation from three
//!   elites: best weighted fitness, best disparity, best edge-cut.
//! - **Normalization** ([`normalize`]): a deterministic pass that moves
//!   boundary cells from oversized into undersized neighbouring places
//!   without lengthening any local boundary.
//!
//! # Example
//!
//! ```
//! use u_partition::evolve::{EvolveConfig, EvolveRunner};
//! use u_partition::normalize::{normalize_sizes, NormalizeConfig};
//! use u_partition::PartitionProblem;
//!
//! let problem = PartitionProblem::new(8, 8, 4);
//! let config = EvolveConfig::default()
//!     .with_gen_base(5)
//!     .with_iterations(50)
//!     .with_seed(7);
//!
//! let mut result = EvolveRunner::run(&problem, &config).unwrap();
//! normalize_sizes(&mut result.best, problem.places, &NormalizeConfig::default()).unwrap();
//! print!("{}", result.best.render(problem.places));
//! ```

pub mod error;
pub mod evolve;
pub mod grid;
pub mod normalize;
pub mod problem;
pub mod random;

pub use error::Error;
pub use problem::PartitionProblem;
