//! Text rendering of the board.

use gridmark_board::{Board, BoardError};
use tracing::instrument;

const INDENT: &str = "\t\t\t\t";

/// Draws the board as text, one row per line with `---` dividers.
///
/// ```text
///  X | O |  
/// ------------
///    | X |  
/// ```
#[instrument(skip(board))]
pub fn render_board<const ROWS: usize, const COLS: usize>(
    board: &Board<ROWS, COLS>,
) -> Result<String, BoardError> {
    let mut out = String::from("\n");
    for row in 0..ROWS {
        out.push_str(INDENT);
        for col in 0..COLS {
            out.push(' ');
            out.push(board.cell_contents(row, col)?);
            if col + 1 < COLS {
                out.push_str(" |");
            }
        }
        if row + 1 < ROWS {
            out.push('\n');
            out.push_str(INDENT);
            // One divider per column plus one to cover the separators.
            out.push_str(&"---".repeat(COLS + 1));
            out.push('\n');
        } else {
            out.push_str("\n\n");
        }
    }
    Ok(out)
}
