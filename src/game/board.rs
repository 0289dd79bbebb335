use crate::{CELL_COUNT, DRAW_SCORE, Move, Player, TicTacToeError};
use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

/// Every line that wins the game, checked in this order: rows, columns,
/// main diagonal, anti-diagonal.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

/// Empty cells in row-major order. Never longer than the board.
pub type MoveList = SmallVec<[Move; CELL_COUNT]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(player) => player.symbol(),
        }
    }
}

/// Outcome of a board, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Search score of a finished game, `None` while it is still being played.
    pub fn score(self) -> Option<i32> {
        match self {
            GameResult::InProgress => None,
            GameResult::Win(player) => Some(player.role().win_score()),
            GameResult::Draw => Some(DRAW_SCORE),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Win(player) => write!(f, "{} wins", player),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// The 3×3 grid. `occupied` mirrors `cells`: a bit is set iff its cell is marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    occupied: FixedBitSet,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            occupied: FixedBitSet::with_capacity(CELL_COUNT),
        }
    }

    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    pub fn is_empty(&self, mv: Move) -> bool {
        !self.occupied.contains(mv.index())
    }

    /// Marks `mv` for `player`. Marking a non-empty cell is rejected and leaves
    /// the board untouched.
    pub fn place(&mut self, mv: Move, player: Player) -> Result<(), TicTacToeError> {
        if !self.is_empty(mv) {
            return Err(TicTacToeError::CellOccupied { mv });
        }
        self.make_move(mv, player);
        Ok(())
    }

    pub fn clear(&mut self, mv: Move) {
        self.cells[mv.index()] = Cell::Empty;
        self.occupied.set(mv.index(), false);
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
        self.occupied.clear();
    }

    /// Marks `mv` until the returned guard is dropped.
    ///
    /// The guard derefs to the board so a search can recurse through it; the cell
    /// is cleared on every exit path, including early breaks out of a loop.
    /// `mv` must be empty.
    pub fn speculate(&mut self, mv: Move, player: Player) -> Speculation<'_> {
        debug_assert!(self.is_empty(mv), "speculating on marked cell {mv}");
        self.make_move(mv, player);
        Speculation { board: self, mv }
    }

    pub(crate) fn make_move(&mut self, mv: Move, player: Player) {
        self.cells[mv.index()] = Cell::Marked(player);
        self.occupied.insert(mv.index());
    }

    /// Empty cells in row-major order. Search breaks ties by this order.
    pub fn available_moves(&self) -> MoveList {
        self.occupied.zeroes().map(Move::from_index).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.count_ones(..)
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    /// Win if some line holds three identical marks, draw if the board is full,
    /// in progress otherwise.
    ///
    /// When several lines match (only reachable through illegal play) the last
    /// matching line in [`LINES`] order decides the winner.
    pub fn evaluate(&self) -> GameResult {
        let mut winner = None;
        for [a, b, c] in LINES {
            let cell = self.cells[a];
            if cell != Cell::Empty && cell == self.cells[b] && cell == self.cells[c] {
                winner = cell.player();
            }
        }

        match winner {
            Some(player) => GameResult::Win(player),
            None if self.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }
}

/// A cell marked by [`Board::speculate`], cleared again on drop.
pub struct Speculation<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}

/// Rows separated by `/`, `x` for the human, `o` for the computer, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Accepts the [`Display`](fmt::Display) notation. Separators and whitespace are
/// optional, so `"xo./.../..."` and `"xo. ... ..."` parse the same.
impl FromStr for Board {
    type Err = TicTacToeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(TicTacToeError::InvalidNotation(format!(
                "expected {} cells, found {}",
                CELL_COUNT,
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (mv, symbol) in Move::all().zip(symbols) {
            if symbol == '.' {
                continue;
            }
            let player = Player::from_symbol(symbol).ok_or_else(|| {
                TicTacToeError::InvalidNotation(format!("unknown cell symbol '{}'", symbol))
            })?;
            board.make_move(mv, player);
        }
        Ok(board)
    }
}
