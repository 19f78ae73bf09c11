//! Draw detection.

use tracing::instrument;

/// True once every cell holds a mark.
#[instrument]
pub fn is_full(move_count: usize, capacity: usize) -> bool {
    move_count >= capacity
}

/// A full board where neither player owns a winning line.
#[instrument]
pub fn is_draw(full: bool, x_wins: bool, o_wins: bool) -> bool {
    full && !x_wins && !o_wins
}
