//! Win detection by pattern matching.
//!
//! A winning line is a list of linear positions. A player wins when every
//! position of some line is in that player's move set.

use std::collections::HashSet;
use tracing::{instrument, trace, warn};

/// The eight winning lines of a 3x3 board.
#[rustfmt::skip]
pub const CLASSIC_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Declarative table of winning lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPatterns {
    lines: Vec<Vec<usize>>,
}

impl WinPatterns {
    /// The classic 3x3 table.
    pub fn classic() -> Self {
        Self {
            lines: CLASSIC_LINES.iter().map(|line| line.to_vec()).collect(),
        }
    }

    /// Every full row, every full column and, on square boards, both diagonals.
    #[instrument]
    pub fn for_dimensions(rows: usize, cols: usize) -> Self {
        let mut lines = Vec::with_capacity(rows + cols + 2);
        if rows == 0 || cols == 0 {
            return Self { lines };
        }

        for r in 0..rows {
            lines.push((0..cols).map(|c| r * cols + c).collect());
        }
        for c in 0..cols {
            lines.push((0..rows).map(|r| r * cols + c).collect());
        }
        if rows == cols {
            lines.push((0..rows).map(|i| i * cols + i).collect());
            lines.push((0..rows).map(|i| i * cols + (cols - 1 - i)).collect());
        }

        trace!(line_count = lines.len(), "Generated win patterns");
        Self { lines }
    }

    /// Builds a table from arbitrary lines.
    ///
    /// Empty lines are dropped: they would be satisfied by any move set.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = usize>,
    {
        lines
            .into_iter()
            .fold(Self { lines: Vec::new() }, |patterns, line| patterns.with_line(line))
    }

    /// Appends one more winning line.
    pub fn with_line(mut self, line: impl IntoIterator<Item = usize>) -> Self {
        let line: Vec<usize> = line.into_iter().collect();
        if line.is_empty() {
            warn!("Ignoring empty win pattern");
        } else {
            self.lines.push(line);
        }
        self
    }

    /// All lines in table order.
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the table has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First line fully contained in `moves`, if any.
    #[instrument(skip_all)]
    pub fn winning_line(&self, moves: &HashSet<usize>) -> Option<&[usize]> {
        self.lines
            .iter()
            .find(|line| line.iter().all(|pos| moves.contains(pos)))
            .map(Vec::as_slice)
    }

    /// True when some line is a subset of `moves`.
    pub fn matches(&self, moves: &HashSet<usize>) -> bool {
        self.winning_line(moves).is_some()
    }
}

impl Default for WinPatterns {
    fn default() -> Self {
        Self::classic()
    }
}
