//! Board error types.

use derive_more::{Display, Error};

/// Error raised by coordinate-taking board operations.
///
/// An occupied cell is not an error; `place_mark` reports it as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside the board.
    #[display(
        "Invalid row or column. row: {} column: {} (board is {}x{})",
        row,
        col,
        rows,
        cols
    )]
    InvalidCoordinate {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
        /// Number of rows on the board.
        rows: usize,
        /// Number of columns on the board.
        cols: usize,
    },
}
