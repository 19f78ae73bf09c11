//! Gridmark console - terminal front end for the gridmark board
//!
//! Renders the board as text, reads moves from a line-oriented console and
//! drives the game loop. All rules live in `gridmark_board`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod render;
mod session;

pub use config::{ConfigError, ConsoleConfig};
pub use console::Console;
pub use render::render_board;
pub use session::{MoveInput, Session, SessionError, Tally, parse_move};
