//! Row/column coordinates and their linear encoding.

use serde::{Deserialize, Serialize};

/// A `(row, col)` pair on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear position of this coordinate on a board `cols` wide.
    pub fn to_linear(self, cols: usize) -> usize {
        to_linear(self.row, self.col, cols)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Encodes `(row, col)` as `row * cols + col`.
pub fn to_linear(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

/// Decodes a linear position on a board `cols` wide.
pub fn from_linear(pos: usize, cols: usize) -> Coordinate {
    Coordinate::new(pos / cols, pos % cols)
}
