//! Genetic operators over boards.
//!
//! Both operators return fresh boards; inputs are never modified. The
//! encoding is a plain row-per-column vector, so no permutation repair is
//! needed — any row value in `[0, n)` is a legal gene.
//!
//! # References
//!
//! - Holland (1975) — single-point crossover
//! - Goldberg (1989), ch. 3 — random-reset ("uniform") mutation

use crate::board::Board;
use rand::Rng;

/// Single-point crossover: parent1's columns `[0, point)` concatenated with
/// parent2's columns `[point, n)`.
///
/// The crossover point is uniform in `[1, n-1]`, so both parents always
/// contribute at least one column.
///
/// # Panics
/// Panics if the parents differ in length or are shorter than 2 (no
/// crossover point exists strictly inside the board). Configuration
/// validation keeps both cases unreachable from the solver.
pub fn single_point_crossover<R: Rng>(parent1: &Board, parent2: &Board, rng: &mut R) -> Board {
    let n = parent1.size();
    assert_eq!(n, parent2.size(), "parents must have equal length");
    assert!(n >= 2, "crossover needs a board of at least 2 columns");

    let point = rng.random_range(1..n);
    let mut rows = Vec::with_capacity(n);
    rows.extend_from_slice(&parent1.rows()[..point]);
    rows.extend_from_slice(&parent2.rows()[point..]);
    Board::from(rows)
}

/// Random-reset mutation: one column re-rolled to a uniform row.
///
/// Picks a column and a replacement row independently and uniformly from
/// `[0, n)`. The replacement may equal the existing row, in which case the
/// returned board equals the input — accepted stochastic behavior, not
/// excluded.
pub fn reset_mutation<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let n = board.size();
    let mut rows = board.rows().to_vec();
    let column = rng.random_range(0..n);
    rows[column] = rng.random_range(0..n);
    Board::from(rows)
}
