pub mod board;
pub mod error;
pub mod moves;
pub mod player;

pub use board::*;
pub use error::*;
pub use moves::*;
pub use player::*;
