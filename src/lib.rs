//! Hybrid metaheuristic N-Queens solver.
//!
//! Solves the N-Queens placement problem (N queens on an N×N board, no two
//! attacking) with a genetic algorithm whose parents are locally refined by
//! a greedy beam search before recombination:
//!
//! - **[`board`]**: Board representation (one queen per column) and the
//!   attacking-pair count that serves as the sole fitness function.
//! - **[`beam`]**: Beam-search refiner — samples a fixed-width neighborhood
//!   of random single-queen moves and greedily accepts strict improvements.
//! - **[`ga`]**: The generational population loop — parent sampling, beam
//!   refinement, single-point crossover, and optional mutation per child.
//!
//! # Usage
//!
//! ```
//! use queens_hybrid::ga::{Solver, SolverConfig};
//!
//! let config = SolverConfig::default()
//!     .with_board_size(6)
//!     .with_seed(42);
//! config.validate().expect("valid configuration");
//!
//! let result = Solver::run(&config);
//! if result.solved {
//!     assert_eq!(result.best.attacks(), 0);
//! }
//! ```
//!
//! # Guarantees
//!
//! The search is heuristic: it terminates with a zero-attack board or, after
//! exhausting its generation budget, with a best-effort non-solution
//! (`solved == false`). Runs are randomized; pass a seed via
//! [`SolverConfig::with_seed`](ga::SolverConfig::with_seed) for
//! reproducible tests.

pub mod beam;
pub mod board;
pub mod error;
pub mod ga;

pub use board::Board;
pub use error::ConfigError;
