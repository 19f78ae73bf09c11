//! Board state machine.
//!
//! Owns the grid, the move counter, the per-player move sets and the turn
//! marker. Placement and turn advance are independent operations; the
//! caller composes them. Terminal states are not enforced here: the board
//! keeps accepting marks after a win or draw.

use super::error::BoardError;
use super::position::{Coordinate, from_linear, to_linear};
use super::rules::{WinPatterns, draw};
use super::types::{Cell, GameStatus, Player};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Grid of `ROWS` x `COLS` cells plus turn and move bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const ROWS: usize = 3, const COLS: usize = 3> {
    cells: [[Cell; COLS]; ROWS],
    move_count: usize,
    current_player: Player,
    starting_player: Player,
    x_moves: HashSet<usize>,
    o_moves: HashSet<usize>,
    patterns: WinPatterns,
}

/// The canonical 3x3 board.
pub type ClassicBoard = Board<3, 3>;

impl<const ROWS: usize, const COLS: usize> Board<ROWS, COLS> {
    /// Number of cells on the board.
    pub const CAPACITY: usize = ROWS * COLS;

    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self::with_starting_player(Player::default())
    }

    /// Creates an empty board with the given player to move.
    #[instrument]
    pub fn with_starting_player(starting_player: Player) -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            move_count: 0,
            current_player: starting_player,
            starting_player,
            x_moves: HashSet::with_capacity(Self::CAPACITY),
            o_moves: HashSet::with_capacity(Self::CAPACITY),
            patterns: WinPatterns::for_dimensions(ROWS, COLS),
        }
    }

    /// Replaces the winning-line table.
    pub fn with_patterns(mut self, patterns: WinPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// Clears every cell, the move counter and both move sets.
    ///
    /// The turn marker is left as is; see [`Board::reset_turn`].
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
        self.move_count = 0;
        self.x_moves.clear();
        self.o_moves.clear();
        debug!("Board reset");
    }

    /// Returns the turn marker to the starting player.
    pub fn reset_turn(&mut self) {
        self.current_player = self.starting_player;
    }

    /// True iff the cell holds no mark.
    #[instrument(skip(self))]
    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell(row, col)? == Cell::Empty)
    }

    /// Writes `player`'s mark into an empty cell.
    ///
    /// Returns `Ok(false)` without mutating anything if the cell is taken.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, player: Player) -> Result<bool, BoardError> {
        let pos = self.validate(row, col)?;

        if self.cells[row][col] != Cell::Empty {
            debug!(pos, "Square already occupied");
            return Ok(false);
        }

        self.cells[row][col] = Cell::Occupied(player);
        self.move_count += 1;
        self.moves_mut(player).insert(pos);
        debug!(pos, move_count = self.move_count, "Mark placed");
        Ok(true)
    }

    /// Cell variant at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.validate(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Display symbol at `(row, col)`: `'X'`, `'O'` or `' '`.
    #[instrument(skip(self))]
    pub fn cell_contents(&self, row: usize, col: usize) -> Result<char, BoardError> {
        Ok(self.cell(row, col)?.symbol())
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Symbol of the player whose turn it is.
    pub fn current_player_symbol(&self) -> char {
        self.current_player.symbol()
    }

    /// Player the turn marker starts with and returns to on [`Board::reset_turn`].
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Flips the turn marker and returns the new player to move.
    #[instrument(skip(self), fields(from = %self.current_player))]
    pub fn advance_turn(&mut self) -> Player {
        self.current_player = self.current_player.opponent();
        self.current_player
    }

    /// True iff some winning line lies entirely within `player`'s moves.
    #[instrument(skip(self))]
    pub fn is_winner(&self, player: Player) -> bool {
        self.patterns.matches(self.moves(player))
    }

    /// True iff the board is full and nobody has won.
    #[instrument(skip(self))]
    pub fn is_draw(&self) -> bool {
        draw::is_draw(
            draw::is_full(self.move_count, Self::CAPACITY),
            self.is_winner(Player::X),
            self.is_winner(Player::O),
        )
    }

    /// Classifies the board. A win takes precedence over a full board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = Player::iter().find(|p| self.is_winner(*p)) {
            GameStatus::Won(winner)
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Coordinates of the first winning line `player` owns.
    pub fn winning_line(&self, player: Player) -> Option<Vec<Coordinate>> {
        self.patterns
            .winning_line(self.moves(player))
            .map(|line| line.iter().map(|pos| from_linear(*pos, COLS)).collect())
    }

    /// Linear positions of every mark `player` has placed.
    pub fn moves(&self, player: Player) -> &HashSet<usize> {
        match player {
            Player::X => &self.x_moves,
            Player::O => &self.o_moves,
        }
    }

    /// Open cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        (0..Self::CAPACITY)
            .map(|pos| from_linear(pos, COLS))
            .filter(|c| self.cells[c.row][c.col] == Cell::Empty)
            .collect()
    }

    /// Number of marks placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Number of cells on the board.
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        ROWS
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        COLS
    }

    /// Winning-line table in use.
    pub fn patterns(&self) -> &WinPatterns {
        &self.patterns
    }

    fn moves_mut(&mut self, player: Player) -> &mut HashSet<usize> {
        match player {
            Player::X => &mut self.x_moves,
            Player::O => &mut self.o_moves,
        }
    }

    /// Bounds check shared by every coordinate-taking operation.
    fn validate(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= ROWS || col >= COLS {
            warn!(row, col, rows = ROWS, cols = COLS, "Coordinate out of range");
            return Err(BoardError::InvalidCoordinate {
                row,
                col,
                rows: ROWS,
                cols: COLS,
            });
        }
        Ok(to_linear(row, col, COLS))
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Board<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = ClassicBoard::new();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.empty_cells().len(), 9);
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board.starting_player(), Player::X);
        assert_eq!((board.rows(), board.cols()), (3, 3));
        assert_eq!(board.capacity(), 9);
        assert_eq!(board.status(), GameStatus::InProgress);
        assert_eq!(board.patterns(), &WinPatterns::classic());
    }

    #[test]
    fn test_place_records_position_in_move_set() {
        let mut board = ClassicBoard::new();
        assert_eq!(board.place_mark(1, 2, Player::O), Ok(true));
        assert!(board.moves(Player::O).contains(&5));
        assert!(board.moves(Player::X).is_empty());
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut board = ClassicBoard::new();
        board.place_mark(0, 0, Player::X).unwrap();
        let before = board.clone();
        assert_eq!(board.place_mark(0, 0, Player::O), Ok(false));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_coordinate_before_any_read() {
        let mut board = ClassicBoard::new();
        let err = board.place_mark(3, 0, Player::X).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidCoordinate {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            }
        );
        assert_eq!(board.move_count(), 0);
        assert!(board.is_cell_empty(0, 3).is_err());
        assert!(board.cell_contents(5, 5).is_err());
    }

    #[test]
    fn test_win_via_status() {
        let mut board = ClassicBoard::new();
        for (r, c) in [(0, 2), (1, 1), (2, 0)] {
            board.place_mark(r, c, Player::O).unwrap();
        }
        assert_eq!(board.status(), GameStatus::Won(Player::O));
        assert_eq!(
            board.winning_line(Player::O),
            Some(vec![
                Coordinate::new(0, 2),
                Coordinate::new(1, 1),
                Coordinate::new(2, 0)
            ])
        );
        assert_eq!(board.winning_line(Player::X), None);
    }

    #[test]
    fn test_reset_turn_returns_to_starting_player() {
        let mut board = ClassicBoard::with_starting_player(Player::O);
        assert_eq!(board.advance_turn(), Player::X);
        board.reset();
        assert_eq!(board.current_player(), Player::X);
        board.reset_turn();
        assert_eq!(board.current_player(), Player::O);
    }

    #[test]
    fn test_custom_patterns() {
        let mut board = ClassicBoard::new().with_patterns(WinPatterns::from_lines([[0, 8]]));
        board.place_mark(0, 0, Player::X).unwrap();
        board.place_mark(2, 2, Player::X).unwrap();
        assert!(board.is_winner(Player::X));
    }
}
