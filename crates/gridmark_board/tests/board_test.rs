//! Tests for the board state machine.

use gridmark_board::{Board, BoardError, Cell, ClassicBoard, GameStatus, Player};

fn fill(board: &mut ClassicBoard, layout: [&str; 3]) {
    for (r, row) in layout.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let player = match ch {
                'X' => Player::X,
                'O' => Player::O,
                _ => continue,
            };
            assert_eq!(board.place_mark(r, c, player), Ok(true));
        }
    }
}

#[test]
fn test_place_on_every_empty_cell() {
    for row in 0..3 {
        for col in 0..3 {
            let mut board = ClassicBoard::new();
            assert_eq!(board.place_mark(row, col, Player::O), Ok(true));
            assert_eq!(board.cell_contents(row, col), Ok('O'));
            assert_eq!(board.is_cell_empty(row, col), Ok(false));
            assert_eq!(board.move_count(), 1);
        }
    }
}

#[test]
fn test_occupied_cell_keeps_contents_and_count() {
    let mut board = ClassicBoard::new();
    board.place_mark(2, 1, Player::X).unwrap();

    assert_eq!(board.place_mark(2, 1, Player::O), Ok(false));
    assert_eq!(board.place_mark(2, 1, Player::X), Ok(false));
    assert_eq!(board.cell(2, 1), Ok(Cell::Occupied(Player::X)));
    assert_eq!(board.move_count(), 1);
    assert!(board.moves(Player::O).is_empty());
}

#[test]
fn test_out_of_range_rejected_by_every_entry_point() {
    let mut board = ClassicBoard::new();
    let bad = [(3, 0), (0, 3), (3, 3), (usize::MAX, 1)];

    for (row, col) in bad {
        let err = BoardError::InvalidCoordinate {
            row,
            col,
            rows: 3,
            cols: 3,
        };
        assert_eq!(board.place_mark(row, col, Player::X), Err(err));
        assert_eq!(board.is_cell_empty(row, col), Err(err));
        assert_eq!(board.cell_contents(row, col), Err(err));
        assert_eq!(board.cell(row, col), Err(err));
    }

    assert_eq!(board, ClassicBoard::new());
}

#[test]
fn test_new_board_reports_every_cell_empty() {
    let board = ClassicBoard::new();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(board.is_cell_empty(row, col), Ok(true));
        }
    }
}

#[test]
fn test_reset_clears_board_but_keeps_turn() {
    let mut board = ClassicBoard::new();
    board.place_mark(0, 0, Player::X).unwrap();
    board.place_mark(1, 1, Player::O).unwrap();
    board.advance_turn();

    board.reset();

    assert_eq!(board.move_count(), 0);
    assert_eq!(board.empty_cells().len(), 9);
    assert!(board.moves(Player::X).is_empty());
    assert!(board.moves(Player::O).is_empty());
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(board.cell_contents(row, col), Ok(' '));
            assert_eq!(board.is_cell_empty(row, col), Ok(true));
        }
    }
    assert_eq!(board.current_player(), Player::O);
}

#[test]
fn test_top_row_wins() {
    let mut board = ClassicBoard::new();
    for col in 0..3 {
        board.place_mark(0, col, Player::X).unwrap();
    }
    assert!(board.is_winner(Player::X));
    assert!(!board.is_winner(Player::O));
}

#[test]
fn test_bent_line_does_not_win() {
    let mut board = ClassicBoard::new();
    for (r, c) in [(0, 0), (1, 1), (0, 2)] {
        board.place_mark(r, c, Player::X).unwrap();
    }
    assert!(!board.is_winner(Player::X));
}

#[test]
fn test_every_line_wins() {
    let lines = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];
    for line in lines {
        let mut board = ClassicBoard::new();
        for (r, c) in line {
            board.place_mark(r, c, Player::O).unwrap();
        }
        assert!(board.is_winner(Player::O), "line {:?} should win", line);
    }
}

#[test]
fn test_scenario_taken_square_then_advance() {
    let mut board = ClassicBoard::new();
    assert_eq!(board.place_mark(0, 0, Player::X), Ok(true));
    assert_eq!(board.place_mark(0, 0, Player::O), Ok(false));
    assert_eq!(board.cell_contents(0, 0), Ok('X'));
    assert_eq!(board.advance_turn(), Player::O);
    assert_eq!(board.current_player_symbol(), 'O');
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut board = ClassicBoard::new();
    fill(&mut board, ["XOX", "XOO", "OXX"]);

    assert!(!board.is_winner(Player::X));
    assert!(!board.is_winner(Player::O));
    assert!(board.is_draw());
    assert_eq!(board.status(), GameStatus::Draw);
}

#[test]
fn test_full_board_with_line_is_not_draw() {
    let mut board = ClassicBoard::new();
    fill(&mut board, ["XXX", "OOX", "XOO"]);

    assert_eq!(board.move_count(), 9);
    assert!(board.is_winner(Player::X));
    assert!(!board.is_draw());
    assert_eq!(board.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_partial_board_is_not_draw() {
    let mut board = ClassicBoard::new();
    fill(&mut board, ["XO ", "   ", "   "]);
    assert!(!board.is_draw());
}

#[test]
fn test_board_keeps_accepting_marks_after_win() {
    let mut board = ClassicBoard::new();
    fill(&mut board, ["XXX", "   ", "   "]);
    assert_eq!(board.place_mark(2, 2, Player::O), Ok(true));
    assert_eq!(board.move_count(), 4);
}

#[test]
fn test_advance_turn_is_pure_toggle() {
    let mut board = ClassicBoard::new();
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(board.advance_turn(), Player::O);
    assert_eq!(board.advance_turn(), Player::X);
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_larger_board_needs_full_line() {
    let mut board: Board<4, 4> = Board::new();
    for col in 0..3 {
        board.place_mark(0, col, Player::X).unwrap();
    }
    assert!(!board.is_winner(Player::X));

    board.place_mark(0, 3, Player::X).unwrap();
    assert!(board.is_winner(Player::X));
    assert!(board.place_mark(4, 0, Player::O).is_err());
    assert_eq!(board.capacity(), 16);
}
