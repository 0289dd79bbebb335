//! Move choosers for the computer side.

pub mod minimax;
pub mod random;

pub use minimax::*;
pub use random::*;

use crate::{Board, Move, Player};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Something that can take a turn on a board.
pub trait Bot {
    fn name(&self) -> &str;

    /// Commits exactly one mark for `player` and returns it, or returns `None`
    /// without touching the board when no cell is empty.
    fn play(&mut self, board: &mut Board, player: Player) -> Option<Move>;
}

/// Which [`Bot`] a match uses, selectable from the command line or config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    #[default]
    Minimax,
    Random,
}

impl BotKind {
    /// `seed` only matters for bots that use randomness.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Bot> {
        match self {
            BotKind::Minimax => Box::new(MinimaxBot::new()),
            BotKind::Random => match seed {
                Some(seed) => Box::new(RandomBot::seeded(seed)),
                None => Box::new(RandomBot::new()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_selects_bot() {
        assert_eq!(BotKind::Minimax.build(None).name(), "minimax_bot");
        assert_eq!(BotKind::Random.build(Some(7)).name(), "random_bot");
    }

    #[test]
    fn test_default_is_minimax() {
        assert_eq!(BotKind::default(), BotKind::Minimax);
    }
}
