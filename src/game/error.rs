use crate::{Move, Player};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicTacToeError {
    #[error("Cell index {index} is out of range (expected 0-8)")]
    OutOfRange { index: usize },

    #[error("Cell ({row}, {col}) is off the board (rows and columns are 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell {mv} is already marked")]
    CellOccupied { mv: Move },

    #[error("The round is over, start a new one first")]
    RoundOver,

    #[error("{player} has no move to play on a live round")]
    NoMoveAvailable { player: Player },

    #[error("Invalid board notation: {0}")]
    InvalidNotation(String),
}
