//! Tic-tac-toe between a human and a computer opponent that never loses.
//!
//! The [`game`] module holds the 3×3 board model and terminal evaluation, the
//! [`bot`] module the move choosers (including the exhaustive alpha-beta search),
//! and [`session`] drives rounds the way a front end would.
//!
//! ```
//! use tictactoe::{Board, GameResult, Player, select_best_move};
//!
//! let mut board: Board = "oo./xx./...".parse().unwrap();
//! let mv = select_best_move(&mut board, Player::Computer).unwrap();
//! assert_eq!((mv.row(), mv.col()), (0, 2));
//! assert_eq!(board.evaluate(), GameResult::Win(Player::Computer));
//! ```

pub mod bot;
pub mod cli;
pub mod config;
pub mod game;
pub mod session;

pub use bot::*;
pub use config::*;
pub use game::*;
pub use session::*;
