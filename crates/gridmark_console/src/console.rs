//! Line-oriented console I/O.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Reads user input and writes game output.
///
/// Generic over the streams so sessions can run against in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Writes `prompt`, then reads one line and returns it lower-cased.
    ///
    /// Returns `None` once input is exhausted.
    #[instrument(skip(self))]
    pub fn read_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write_output(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }

        let line = line.trim_end_matches(['\r', '\n']).to_lowercase();
        debug!(input = %line, "Read user input");
        Ok(Some(line))
    }

    /// Writes `text` and flushes.
    pub fn write_output(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Clears the terminal, if enabled.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// The output stream.
    pub fn output(&self) -> &W {
        &self.output
    }
}
