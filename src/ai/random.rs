use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Agent with a fixed RNG seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> usize {
        let moves = board.legal_moves();
        assert!(!moves.is_empty(), "no legal moves available");
        let idx = self.rng.random_range(0..moves.len());
        moves[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
