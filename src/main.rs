//! Command-line front end for the hybrid N-Queens solver.

use clap::Parser;
use queens_hybrid::ga::{Solver, SolverConfig};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "queens-hybrid")]
#[command(about = "Solve N-Queens with a beam-search-refined genetic algorithm")]
struct Args {
    /// Number of queens (prompted on stdin when omitted)
    n: Option<usize>,

    /// Number of boards in the initial population
    #[arg(long, default_value_t = 50)]
    population_size: usize,

    /// Probability of one extra mutation per child
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Generation budget before giving up
    #[arg(long, default_value_t = 1000)]
    max_generations: usize,

    /// Mutated samples per beam refinement step
    #[arg(long, default_value_t = 10)]
    beam_width: usize,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Breed each generation's offspring in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let n = match args.n {
        Some(n) => n,
        None => match prompt_board_size() {
            Ok(n) => n,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(2);
            }
        },
    };

    let mut config = SolverConfig::default()
        .with_board_size(n)
        .with_population_size(args.population_size)
        .with_mutation_rate(args.mutation_rate)
        .with_max_generations(args.max_generations)
        .with_beam_width(args.beam_width)
        .with_parallel(args.parallel);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        return ExitCode::from(2);
    }

    let result = Solver::run(&config);

    println!("Solution: {}", result.best);
    println!("Number of attacks: {}", result.attacks);
    println!("Generation: {}", result.generations);

    // Completion exits 0 whether or not a solution was found; callers that
    // care inspect the printed attack count.
    ExitCode::SUCCESS
}

fn prompt_board_size() -> io::Result<usize> {
    print!("Enter Number of Queens: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    line.trim()
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "expected an integer"))
}
