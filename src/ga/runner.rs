//! Evolutionary loop execution.
//!
//! [`Solver`] orchestrates the complete hybrid process: initialization →
//! evaluation → parent sampling → beam refinement → crossover → mutation →
//! repeat, until a zero-attack board appears or the generation budget runs
//! out.

use super::config::SolverConfig;
use super::operators::{reset_mutation, single_point_crossover};
use crate::beam::BeamRefiner;
use crate::board::Board;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a solver run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// The returned board: a solution when `solved`, otherwise the
    /// best-effort final candidate.
    pub best: Board,

    /// Attack count of `best` (0 iff it is a solution).
    pub attacks: usize,

    /// Number of completed evolutionary cycles.
    pub generations: usize,

    /// Whether the run terminated by finding a zero-attack board, as
    /// opposed to exhausting the budget or being cancelled.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best attack count observed at each evaluation phase.
    pub attack_history: Vec<usize>,
}

/// Executes the hybrid evolutionary loop.
///
/// # Usage
///
/// ```
/// use queens_hybrid::ga::{Solver, SolverConfig};
///
/// let config = SolverConfig::default().with_board_size(4).with_seed(42);
/// let result = Solver::run(&config);
/// assert_eq!(result.best.size(), 4);
/// ```
pub struct Solver;

impl Solver {
    /// Runs the solver.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SolverConfig::validate`] first to get a descriptive error).
    pub fn run(config: &SolverConfig) -> SolverResult {
        Self::run_with_cancel(config, None)
    }

    /// Runs the solver with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the current population's
    /// first board as a best-effort result. The check happens only between
    /// generations, so observable results are unchanged when the flag is
    /// never raised.
    pub fn run_with_cancel(
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolverResult {
        config.validate().expect("invalid SolverConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = config.board_size;

        // Initializing
        let mut population: Vec<Board> = (0..config.population_size)
            .map(|_| Board::random(n, &mut rng))
            .collect();

        let mut attack_history = Vec::new();
        let mut generation = 0usize;
        let mut cancelled = false;

        for _ in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Evaluating: ascending by attack count, best first.
            population.sort_by_cached_key(|board| board.attacks());
            let best_attacks = population[0].attacks();
            attack_history.push(best_attacks);

            if best_attacks == 0 {
                return SolverResult {
                    best: population[0].clone(),
                    attacks: 0,
                    generations: generation,
                    solved: true,
                    cancelled: false,
                    attack_history,
                };
            }

            // Reproducing: the offspring replace the population wholesale.
            population = breed(&population, config, &mut rng);
            generation += 1;
        }

        // Budget exhausted (or cancelled): the first board of the unsorted
        // last-produced population, not the best ever seen.
        let best = population[0].clone();
        let attacks = best.attacks();
        SolverResult {
            best,
            attacks,
            generations: generation,
            solved: false,
            cancelled,
            attack_history,
        }
    }
}

/// Produce `population_size / 2` offspring from the current population.
///
/// The count is fixed by the configured size, not the current population
/// length, so the population shrinks to half after the first generation
/// and stays there.
fn breed(population: &[Board], config: &SolverConfig, rng: &mut StdRng) -> Vec<Board> {
    let offspring_count = config.population_size / 2;

    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            // Independent per-offspring RNGs keep the per-offspring
            // algorithm identical to the sequential path; only draw order
            // differs.
            let seeds: Vec<u64> = (0..offspring_count).map(|_| rng.random()).collect();
            return seeds
                .into_par_iter()
                .map(|seed| {
                    let mut offspring_rng = StdRng::seed_from_u64(seed);
                    make_offspring(population, config, &mut offspring_rng)
                })
                .collect();
        }
    }

    (0..offspring_count)
        .map(|_| make_offspring(population, config, rng))
        .collect()
}

/// One offspring: two uniform with-replacement parent draws from the full
/// population, beam refinement of both, crossover, optional mutation.
fn make_offspring<R: Rng>(population: &[Board], config: &SolverConfig, rng: &mut R) -> Board {
    let parent1 = &population[rng.random_range(0..population.len())];
    let parent2 = &population[rng.random_range(0..population.len())];

    let refined1 = BeamRefiner::refine(parent1, &config.beam, rng);
    let refined2 = BeamRefiner::refine(parent2, &config.beam, rng);

    let mut child = single_point_crossover(&refined1, &refined2, rng);
    if rng.random_range(0.0..1.0) < config.mutation_rate {
        child = reset_mutation(&child, rng);
    }
    child
}

// ============================================================================
// Tests
// ============================================================================
