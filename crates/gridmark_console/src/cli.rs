//! Command-line interface for gridmark.

use clap::{Parser, ValueEnum};
use gridmark_board::Player;

/// Gridmark - two-player grid marking game in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Play a grid marking game against a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if missing)
    #[arg(short, long, default_value = "gridmark.toml")]
    pub config: std::path::PathBuf,

    /// Do not clear the screen between moves
    #[arg(long)]
    pub no_clear: bool,

    /// Player who moves first (overrides the config file)
    #[arg(short, long, value_enum)]
    pub starting_player: Option<Mark>,
}

/// Mark selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mark {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}
