//! Gridmark board - rules engine for grid marking games
//!
//! A two-player game on an `ROWS` x `COLS` grid (3x3 by default): players
//! take turns writing their mark into empty cells, and whoever first owns a
//! full row, column or diagonal wins.
//!
//! # Architecture
//!
//! - **Board**: state machine owning the grid, move counter and turn marker
//! - **Rules**: declarative winning-line table and draw detection
//! - **Types**: players, cells and the computed game status
//!
//! # Example
//!
//! ```
//! use gridmark_board::{ClassicBoard, Player};
//!
//! let mut board = ClassicBoard::new();
//! assert_eq!(board.place_mark(0, 0, Player::X), Ok(true));
//! assert_eq!(board.place_mark(0, 0, Player::O), Ok(false));
//! assert_eq!(board.cell_contents(0, 0), Ok('X'));
//! assert_eq!(board.advance_turn(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
mod types;

pub use board::{Board, ClassicBoard};
pub use error::BoardError;
pub use position::{Coordinate, from_linear, to_linear};
pub use rules::WinPatterns;
pub use types::{Cell, GameStatus, Player};
