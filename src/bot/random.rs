use crate::{Board, Bot, Move, Player};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Picks a uniformly random empty cell.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same seed, same sequence of moves on the same boards.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "random_bot"
    }

    fn play(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        let moves = board.available_moves();
        let chosen = *moves.choose(&mut self.rng)?;
        board.make_move(chosen, player);
        Some(chosen)
    }
}
