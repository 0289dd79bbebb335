use crate::TicTacToeError;
use std::fmt;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the board, stored as its row-major index (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u8);

impl Move {
    /// Builds a move from a row-major index, rejecting anything past the last cell.
    pub fn new(index: usize) -> Result<Self, TicTacToeError> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(TicTacToeError::OutOfRange { index })
        }
    }

    pub fn from_row_col(row: usize, col: usize) -> Result<Self, TicTacToeError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(TicTacToeError::OutOfBounds { row, col });
        }
        Ok(Self((row * BOARD_SIZE + col) as u8))
    }

    /// Trusted constructor for indices produced by the board itself.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self(index as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT).map(Move::from_index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_every_cell() {
        for index in 0..CELL_COUNT {
            assert_eq!(Move::new(index).unwrap().index(), index);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Move::new(9),
            Err(TicTacToeError::OutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_row_col_mapping_is_row_major() {
        let mv = Move::from_row_col(1, 2).unwrap();
        assert_eq!(mv.index(), 5);
        assert_eq!(mv.row(), 1);
        assert_eq!(mv.col(), 2);
    }

    #[test]
    fn test_from_row_col_rejects_bad_column() {
        assert_eq!(
            Move::from_row_col(0, 3),
            Err(TicTacToeError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(
            Move::from_row_col(3, 0),
            Err(TicTacToeError::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_from_row_col_reports_huge_coordinates() {
        assert_eq!(
            Move::from_row_col(usize::MAX, 0),
            Err(TicTacToeError::OutOfBounds { row: usize::MAX, col: 0 })
        );
        assert_eq!(
            Move::from_row_col(2, usize::MAX),
            Err(TicTacToeError::OutOfBounds { row: 2, col: usize::MAX })
        );
    }

    #[test]
    fn test_all_iterates_in_order() {
        let indices: Vec<usize> = Move::all().map(Move::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_display_shows_row_and_col() {
        assert_eq!(Move::new(7).unwrap().to_string(), "(2, 1)");
    }
}
