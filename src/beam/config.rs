//! Beam refiner configuration.

use crate::error::ConfigError;

/// Configuration for the beam-search refiner.
///
/// # Examples
///
/// ```
/// use queens_hybrid::beam::BeamConfig;
///
/// let config = BeamConfig::default().with_width(20);
/// assert_eq!(config.width, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeamConfig {
    /// Number of independent mutated samples drawn per refinement step.
    pub width: usize,

    /// Hard cap on refinement steps.
    ///
    /// The climb terminates on its own (the attack count strictly decreases
    /// on every accepted step and is bounded below by 0); the cap bounds
    /// pathological runs. At the cap the current best is returned as-is.
    pub max_steps: usize,

    /// Sampling base for each step's neighborhood.
    ///
    /// `false` (default): every step samples the *original* seed board, so
    /// accepted steps do not move the neighborhood. The genetic loop's
    /// convergence is tuned to this independent-resampling behavior.
    ///
    /// `true`: samples the running best instead (classic hill-climbing),
    /// exposed for experimentation.
    pub climb_from_current: bool,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            width: 10,
            max_steps: 10_000,
            climb_from_current: false,
        }
    }
}

impl BeamConfig {
    /// Sets the sample width per refinement step.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the refinement step cap.
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = steps;
        self
    }

    /// Selects hill-climbing from the running best instead of resampling
    /// the original seed.
    pub fn with_climb_from_current(mut self, climb: bool) -> Self {
        self.climb_from_current = climb;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroBeamWidth);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroBeamSteps);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BeamConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.max_steps, 10_000);
        assert!(!config.climb_from_current);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BeamConfig::default()
            .with_width(5)
            .with_max_steps(100)
            .with_climb_from_current(true);
        assert_eq!(config.width, 5);
        assert_eq!(config.max_steps, 100);
        assert!(config.climb_from_current);
    }

    #[test]
    fn test_validate_zero_width() {
        let config = BeamConfig::default().with_width(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBeamWidth));
    }

    #[test]
    fn test_validate_zero_steps() {
        let config = BeamConfig::default().with_max_steps(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBeamSteps));
    }
}
