//! Criterion benchmarks for the hybrid N-Queens solver.
//!
//! Measures the O(N²) fitness function in isolation, one beam refinement,
//! and full solver runs at moderate board sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_hybrid::beam::{BeamConfig, BeamRefiner};
use queens_hybrid::ga::{Solver, SolverConfig};
use queens_hybrid::Board;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_attacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [8usize, 16, 32, 64] {
        let board = Board::random(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| black_box(board.attacks()));
        });
    }
    group.finish();
}

fn bench_beam_refine(c: &mut Criterion) {
    let mut group = c.benchmark_group("beam_refine");
    let config = BeamConfig::default();

    for n in [8usize, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            let seed = Board::random(n, &mut rng);
            b.iter(|| black_box(BeamRefiner::refine(&seed, &config, &mut rng)));
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for n in [6usize, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let config = SolverConfig::default().with_board_size(n).with_seed(42);
            b.iter(|| black_box(Solver::run(&config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_attacks, bench_beam_refine, bench_solve);
criterion_main!(benches);
