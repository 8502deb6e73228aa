//! Evolution configuration.
//!
//! [`EvolveConfig`] holds every parameter of the generational loop.

use super::types::Weights;

/// Configuration for the evolutionary partitioner.
///
/// # Defaults
///
/// ```
/// use u_partition::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.gen_base, 50);
/// assert_eq!(config.population_size(), 200);
/// assert_eq!(config.iterations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_partition::evolve::{EvolveConfig, Weights};
///
/// let config = EvolveConfig::default()
///     .with_gen_base(10)
///     .with_iterations(100)
///     .with_weights(Weights::new(5, 1))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Population scaling factor. The population holds `4 * gen_base` grids.
    pub gen_base: usize,

    /// Number of generations to run.
    pub iterations: usize,

    /// Disparity and edge-cut weights of the fitness function.
    pub weights: Weights,

    /// Attempts allowed per requested cell change before a mutation gives up.
    ///
    /// Bounds the work spent on nearly homogeneous grids where random cells
    /// rarely sit on a boundary.
    pub max_attempts_per_change: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            gen_base: 50,
            iterations: 500,
            weights: Weights::default(),
            max_attempts_per_change: 1_000,
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Total number of candidates, `4 * gen_base`.
    pub fn population_size(&self) -> usize {
        4 * self.gen_base
    }

    /// Sets the population scaling factor.
    pub fn with_gen_base(mut self, n: usize) -> Self {
        self.gen_base = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets both fitness weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the mutation attempt allowance per requested change.
    pub fn with_max_attempts_per_change(mut self, n: usize) -> Self {
        self.max_attempts_per_change = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.gen_base == 0 {
            return Err("gen_base must be at least 1".into());
        }
        if self.weights.disparity == 0 || self.weights.cut == 0 {
            return Err("weights must be positive".into());
        }
        if self.max_attempts_per_change == 0 {
            return Err("max_attempts_per_change must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolveConfig::default();
        assert_eq!(config.gen_base, 50);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.weights, Weights::new(3, 2));
        assert_eq!(config.max_attempts_per_change, 1_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolveConfig::default()
            .with_gen_base(3)
            .with_iterations(20)
            .with_weights(Weights::new(1, 4))
            .with_max_attempts_per_change(16)
            .with_seed(7);

        assert_eq!(config.population_size(), 12);
        assert_eq!(config.iterations, 20);
        assert_eq!(config.weights, Weights::new(1, 4));
        assert_eq!(config.max_attempts_per_change, 16);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_zero_gen_base() {
        assert!(EvolveConfig::default().with_gen_base(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_weight() {
        let config = EvolveConfig::default().with_weights(Weights::new(0, 2));
        assert!(config.validate().is_err());
        let config = EvolveConfig::default().with_weights(Weights::new(2, 0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = EvolveConfig::default().with_max_attempts_per_change(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        assert!(EvolveConfig::default().with_iterations(0).validate().is_ok());
    }
}
