//! A game-state engine for the board game 'Connect 4'
//!
//! The engine owns the grid, whose turn it is and the outcome of the game.
//! Pieces fall to the lowest free row of the chosen column and the first
//! player to line up four of their pieces horizontally, vertically or
//! diagonally wins. A full board with no line of four is a tie.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{GameEngine, Outcome, Placement, Position};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut engine = GameEngine::new(6, 7)?;
//! let mut result = None;
//! for &column in [0, 1, 0, 1, 0, 1, 0].iter() {
//!     result = Some(engine.drop_piece(column)?);
//! }
//! let result = result.unwrap();
//!
//! assert_eq!(result.outcome, Outcome::PlayerOneWin);
//! assert_eq!(result.placement, Placement::Placed(Position { row: 2, column: 0 }));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod config;

pub mod error;

pub mod grid;

pub mod engine;


pub use config::GameConfig;
pub use engine::{DropResult, GameEngine, Outcome, Placement, Player};
pub use error::EngineError;
pub use grid::{Cell, Direction, Grid, Position};

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The number of consecutive pieces needed to win
pub const WIN_LENGTH: usize = 4;

// the default board must be a valid board
const_assert!(HEIGHT > 0 && WIDTH > 0);
const_assert!(WIN_LENGTH > 1);
