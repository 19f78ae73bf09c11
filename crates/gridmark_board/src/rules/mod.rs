//! Game rules for grid marking games.
//!
//! Pure functions and tables for evaluating board state. Rules are
//! separated from board storage so patterns can be swapped or extended
//! without touching placement logic.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::WinPatterns;
