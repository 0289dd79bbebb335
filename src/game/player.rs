use serde::{Deserialize, Serialize};
use std::fmt;

/// Score of a finished game that nobody won.
pub const DRAW_SCORE: i32 = 0;

/// The two sides of a match. Which one is which never changes during a process;
/// only who opens a round does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Computer,
}

/// Search role of a player. The computer maximizes, the human minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn role(self) -> Role {
        match self {
            Player::Human => Role::Minimizer,
            Player::Computer => Role::Maximizer,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'x',
            Player::Computer => 'o',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Player> {
        match symbol.to_ascii_lowercase() {
            'x' => Some(Player::Human),
            'o' => Some(Player::Computer),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

impl Role {
    /// Player whose marks are placed on this role's layer of the search.
    pub fn player(self) -> Player {
        match self {
            Role::Maximizer => Player::Computer,
            Role::Minimizer => Player::Human,
        }
    }

    pub fn win_score(self) -> i32 {
        match self {
            Role::Maximizer => 1,
            Role::Minimizer => -1,
        }
    }

    /// True when `score` is strictly better than `best` for this role.
    pub fn prefers(self, score: i32, best: i32) -> bool {
        match self {
            Role::Maximizer => score > best,
            Role::Minimizer => score < best,
        }
    }
}
