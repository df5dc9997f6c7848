//! Beam refinement loop.

use super::config::BeamConfig;
use crate::board::Board;
use crate::ga::operators::reset_mutation;
use rand::Rng;

/// Greedy beam-search refiner for a single board.
///
/// # Usage
///
/// ```
/// use queens_hybrid::beam::{BeamConfig, BeamRefiner};
/// use queens_hybrid::Board;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let seed = Board::random(8, &mut rng);
/// let refined = BeamRefiner::refine(&seed, &BeamConfig::default(), &mut rng);
/// assert!(refined.attacks() <= seed.attacks());
/// ```
pub struct BeamRefiner;

impl BeamRefiner {
    /// Hill-climbs `seed` by repeated neighborhood sampling.
    ///
    /// Each step draws `config.width` independent single-queen mutations of
    /// the sampling base (the original `seed` by default, see
    /// [`BeamConfig::climb_from_current`]), takes the first sampled board
    /// with the fewest attacks, and accepts it only on strict improvement
    /// over the current best. The first non-improving step ends the climb.
    ///
    /// The returned board never has more attacks than `seed`.
    ///
    /// # Panics
    /// Panics on a zero sample width; [`BeamConfig::validate`] rejects it
    /// ahead of time.
    pub fn refine<R: Rng>(seed: &Board, config: &BeamConfig, rng: &mut R) -> Board {
        assert!(config.width >= 1, "beam width must be at least 1");

        let mut current = seed.clone();
        let mut current_attacks = current.attacks();

        for _ in 0..config.max_steps {
            let base = if config.climb_from_current {
                &current
            } else {
                seed
            };

            // First minimal sample wins ties, so track strictly-better only.
            let mut best_neighbor: Option<(Board, usize)> = None;
            for _ in 0..config.width {
                let neighbor = reset_mutation(base, rng);
                let attacks = neighbor.attacks();
                match best_neighbor {
                    Some((_, best)) if attacks >= best => {}
                    _ => best_neighbor = Some((neighbor, attacks)),
                }
            }

            let (neighbor, attacks) =
                best_neighbor.expect("width >= 1 samples at least one neighbor");
            if attacks >= current_attacks {
                break;
            }
            current = neighbor;
            current_attacks = attacks;
        }

        current
    }
}
