//! Solver configuration.
//!
//! [`SolverConfig`] holds all parameters that control the evolutionary loop.

use crate::beam::BeamConfig;
use crate::error::ConfigError;

/// Configuration for the hybrid solver.
///
/// Controls board size, population size, operator rates, the generation
/// budget, and the nested beam refiner.
///
/// # Defaults
///
/// ```
/// use queens_hybrid::ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_hybrid::ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_board_size(10)
///     .with_population_size(100)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of queens N (board side length).
    ///
    /// Must be at least 1. N = 1 is trivially solved by the only board
    /// `[0]` during the first evaluation, before any operator runs.
    pub board_size: usize,

    /// Number of boards in the initial population.
    ///
    /// Must be even (offspring consume two parents each) and at least 2.
    /// Each generation produces exactly half this many offspring, which
    /// replace the population wholesale, so after the first generation
    /// the population holds `population_size / 2` boards. Deliberate;
    /// the loop's convergence characteristics depend on it.
    pub population_size: usize,

    /// Probability that a freshly produced child undergoes one extra
    /// random-reset mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Maximum number of generations before giving up.
    ///
    /// 0 is allowed: the run returns an un-evolved random board as a
    /// best-effort result.
    pub max_generations: usize,

    /// Parameters for the beam refiner applied to every selected parent.
    pub beam: BeamConfig,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to breed each generation's offspring in parallel.
    ///
    /// Only effective with the `parallel` feature; ignored otherwise.
    /// Offspring are independent, so parallel runs produce boards of the
    /// same quality, but random draw order differs from sequential runs.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 50,
            mutation_rate: 0.1,
            max_generations: 1000,
            beam: BeamConfig::default(),
            seed: None,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// Sets the number of queens.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the beam refiner parameters.
    pub fn with_beam(mut self, beam: BeamConfig) -> Self {
        self.beam = beam;
        self
    }

    /// Convenience builder for the beam sample width.
    ///
    /// Equivalent to `.with_beam(config.beam.with_width(width))`.
    pub fn with_beam_width(mut self, width: usize) -> Self {
        self.beam.width = width;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel breeding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Every rejection here is fatal and reported before the loop starts;
    /// a configuration that passes cannot fail later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::BoardSizeZero);
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationNotEven(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        self.beam.validate()
    }
}
