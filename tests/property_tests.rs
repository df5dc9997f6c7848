//! Property-based tests for queens-hybrid.
//!
//! Uses proptest to verify invariants of the fitness function, the genetic
//! operators, and the beam refiner across random boards and seeds.

use proptest::prelude::*;
use queens_hybrid::beam::{BeamConfig, BeamRefiner};
use queens_hybrid::ga::operators::{reset_mutation, single_point_crossover};
use queens_hybrid::Board;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A random board of size 1..=12 as a plain row vector.
fn board_rows() -> impl Strategy<Value = Vec<usize>> {
    (1usize..=12).prop_flat_map(|n| prop::collection::vec(0..n, n))
}

/// A pair of equal-length boards of size 2..=12.
fn board_pair() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (2usize..=12).prop_flat_map(|n| {
        (
            prop::collection::vec(0..n, n),
            prop::collection::vec(0..n, n),
        )
    })
}

proptest! {
    // ==================== Attack counting ====================

    #[test]
    fn attacks_bounded_by_pair_count(rows in board_rows()) {
        let n = rows.len();
        let board = Board::from(rows);
        prop_assert!(board.attacks() <= n * (n - 1) / 2);
    }

    #[test]
    fn attacks_zero_iff_solution(rows in board_rows()) {
        let board = Board::from(rows);
        prop_assert_eq!(board.is_solution(), board.attacks() == 0);
    }

    #[test]
    fn uniform_row_board_attacks_every_pair(n in 1usize..=12) {
        // All queens on one row: every unordered pair attacks.
        let board = Board::from(vec![0; n]);
        prop_assert_eq!(board.attacks(), n * (n - 1) / 2);
    }

    // ==================== Mutation ====================

    #[test]
    fn mutation_preserves_length_and_range(rows in board_rows(), seed in any::<u64>()) {
        let n = rows.len();
        let board = Board::from(rows);
        let mut rng = StdRng::seed_from_u64(seed);
        let mutated = reset_mutation(&board, &mut rng);

        prop_assert_eq!(mutated.size(), n);
        prop_assert!(mutated.rows().iter().all(|&r| r < n));
    }

    #[test]
    fn mutation_changes_at_most_one_position(rows in board_rows(), seed in any::<u64>()) {
        let board = Board::from(rows);
        let mut rng = StdRng::seed_from_u64(seed);
        let mutated = reset_mutation(&board, &mut rng);

        let differing = board
            .rows()
            .iter()
            .zip(mutated.rows())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert!(differing <= 1);
    }

    // ==================== Crossover ====================

    #[test]
    fn crossover_is_a_prefix_suffix_splice(
        (p1_rows, p2_rows) in board_pair(),
        seed in any::<u64>(),
    ) {
        let n = p1_rows.len();
        let p1 = Board::from(p1_rows);
        let p2 = Board::from(p2_rows);
        let mut rng = StdRng::seed_from_u64(seed);
        let child = single_point_crossover(&p1, &p2, &mut rng);

        prop_assert_eq!(child.size(), n);
        let explained = (1..n).any(|point| {
            child.rows()[..point] == p1.rows()[..point]
                && child.rows()[point..] == p2.rows()[point..]
        });
        prop_assert!(explained, "no split point explains the child");
    }

    // ==================== Beam refinement ====================

    #[test]
    fn refine_is_monotone(rows in board_rows(), seed in any::<u64>()) {
        let board = Board::from(rows);
        let mut rng = StdRng::seed_from_u64(seed);
        let config = BeamConfig::default().with_width(5).with_max_steps(100);
        let refined = BeamRefiner::refine(&board, &config, &mut rng);

        prop_assert_eq!(refined.size(), board.size());
        prop_assert!(refined.attacks() <= board.attacks());
    }

    #[test]
    fn refine_keeps_solutions_fixed(seed in any::<u64>()) {
        // A zero-attack board is a fixed point of refinement.
        let board = Board::from(vec![1, 3, 0, 2]);
        let mut rng = StdRng::seed_from_u64(seed);
        let refined = BeamRefiner::refine(&board, &BeamConfig::default(), &mut rng);
        prop_assert_eq!(refined, board);
    }
}
