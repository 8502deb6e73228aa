//! Seedable random source.
//!
//! Every stochastic operator in this crate takes `&mut R where R: Rng`
//! explicitly; runners build that source here so a fixed seed reproduces
//! a run exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from `seed`, drawing a fresh seed when `None`.
///
/// Returns the seed actually used so callers can log it.
pub fn rng_from_option(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (create_rng(seed), seed)
}
