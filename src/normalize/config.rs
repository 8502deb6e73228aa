//! Normalizer configuration.

/// Configuration for [`normalize_sizes`](super::normalize_sizes).
///
/// ```
/// use u_partition::normalize::NormalizeConfig;
///
/// let config = NormalizeConfig::default().with_max_passes(100);
/// assert_eq!(config.max_passes, Some(100));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeConfig {
    /// Upper bound on scan passes. `None` runs until convergence.
    pub max_passes: Option<usize>,
}

impl NormalizeConfig {
    /// Caps the number of scan passes.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_passes == Some(0) {
            return Err("max_passes must be positive or None".into());
        }
        Ok(())
    }
}
