//! Error types for the solver.
//!
//! All configuration problems are detected by
//! [`SolverConfig::validate`](crate::ga::SolverConfig::validate) before the
//! evolutionary loop starts; nothing inside the loop itself can fail.

use thiserror::Error;

/// A configuration rejected before the search begins.
///
/// These are fatal: the run aborts, nothing is retried. Operator-level
/// preconditions (crossover on boards shorter than 2, a zero-width beam)
/// cannot be reached once validation has passed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Board size 0 has no queens to place.
    #[error("board size must be at least 1")]
    BoardSizeZero,

    /// Offspring are produced in pairs, so the population must split evenly.
    #[error("population size must be even, got {0}")]
    PopulationNotEven(usize),

    /// Parent sampling needs at least one breeding pair.
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Sampling zero neighbors per refinement step can never pick a best one.
    #[error("beam width must be at least 1")]
    ZeroBeamWidth,

    /// The refiner's defensive step cap must leave room for at least one step.
    #[error("beam step limit must be at least 1")]
    ZeroBeamSteps,

    /// Mutation is applied with this probability; it must be a probability.
    #[error("mutation rate must lie in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
}
