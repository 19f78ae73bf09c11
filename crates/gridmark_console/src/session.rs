//! Console game loop.
//!
//! Drives a [`ClassicBoard`]: read a move, place it, evaluate the outcome,
//! advance the turn. The board itself never refuses moves after a game ends,
//! so the loop stops asking once a game is decided.

use super::config::ConsoleConfig;
use super::console::Console;
use super::render::render_board;
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use gridmark_board::{BoardError, ClassicBoard, GameStatus, Player};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

/// Error that ends a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),

    /// The board rejected a coordinate the session produced itself.
    #[display("Board error: {}", _0)]
    Board(BoardError),
}

/// Results of the games played in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// A line of user input during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Stop playing.
    Quit,
    /// Place a mark at `(row, col)`.
    At(usize, usize),
}

/// Parses `"row col"` (space or comma separated) or `q`/`quit`.
#[instrument]
pub fn parse_move(input: &str) -> Option<MoveInput> {
    let input = input.trim();
    if input == "q" || input == "quit" {
        return Some(MoveInput::Quit);
    }

    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(MoveInput::At(row, col))
}

/// One console session: a board, the streams, and the running tally.
#[derive(Debug)]
pub struct Session<R, W> {
    board: ClassicBoard,
    console: Console<R, W>,
    config: ConsoleConfig,
    tally: Tally,
    notice: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing board.
    pub fn new(board: ClassicBoard, console: Console<R, W>, config: ConsoleConfig) -> Self {
        Self {
            board,
            console,
            config,
            tally: Tally::default(),
            notice: None,
        }
    }

    /// Plays games until the user quits, declines a rematch, or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Tally, SessionError> {
        while let Some(status) = self.play_game()? {
            self.tally.record(status);
            info!(%status, games = self.tally.games(), "Game finished");

            let summary = format!(
                "{}\nScore - {}: {}  {}: {}  draws: {}\n",
                self.announce(status),
                self.config.name_for(Player::X),
                self.tally.x_wins,
                self.config.name_for(Player::O),
                self.tally.o_wins,
                self.tally.draws,
            );
            self.console.write_output(&summary)?;

            match self.console.read_input("Play again? (y/n): ")? {
                Some(answer) if answer.trim().starts_with('y') => {
                    self.board.reset();
                    debug!(next = %self.board.current_player(), "Starting new game");
                }
                _ => break,
            }
        }

        self.console.write_output("Thanks for playing!\n")?;
        Ok(self.tally)
    }

    /// Plays until the current game is decided.
    ///
    /// Returns `None` if the user quit or input ended first.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<Option<GameStatus>, SessionError> {
        loop {
            self.show_board()?;

            let player = self.board.current_player();
            let prompt = format!(
                "Player {} ({}), enter row and column (0-{}), or q to quit: ",
                self.config.name_for(player),
                player.symbol(),
                self.board.rows() - 1,
            );
            let Some(line) = self.console.read_input(&prompt)? else {
                return Ok(None);
            };

            let (row, col) = match parse_move(&line) {
                Some(MoveInput::Quit) => return Ok(None),
                Some(MoveInput::At(row, col)) => (row, col),
                None => {
                    self.notice = Some(format!(
                        "Could not read a move from '{}'. Enter a row and column, e.g. 1 2",
                        line
                    ));
                    continue;
                }
            };

            match self.board.place_mark(row, col, player) {
                Ok(true) => {}
                Ok(false) => {
                    self.notice = Some(format!("Square {} {} is already taken.", row, col));
                    continue;
                }
                Err(err @ BoardError::InvalidCoordinate { .. }) => {
                    self.notice = Some(err.to_string());
                    continue;
                }
            }

            let status = self.board.status();
            self.board.advance_turn();
            if status.is_terminal() {
                self.show_board()?;
                return Ok(Some(status));
            }
        }
    }

    /// The board being played.
    pub fn board(&self) -> &ClassicBoard {
        &self.board
    }

    /// The console streams.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Results so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    fn show_board(&mut self) -> Result<(), SessionError> {
        self.console.clear()?;
        let text = render_board(&self.board)?;
        self.console.write_output(&text)?;
        if let Some(notice) = self.notice.take() {
            self.console.write_output(&format!("{}\n", notice))?;
        }
        Ok(())
    }

    fn announce(&self, status: GameStatus) -> String {
        match status {
            GameStatus::Won(player) => format!(
                "{} ({}) wins!",
                self.config.name_for(player),
                player.symbol()
            ),
            GameStatus::Draw => "It's a draw.".to_string(),
            GameStatus::InProgress => String::new(),
        }
    }
}
