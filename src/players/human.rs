use std::io::{self, BufRead, Write};

use crate::error::{InputError, PlayError};
use crate::game::{Coord, GameState};

use super::MoveSource;

/// Blocking source of input lines for a human seat.
///
/// Implemented for every `BufRead` and for [`SharedStdin`]. `io::Stdin`
/// itself is not `BufRead`, and holding a `StdinLock` per seat would
/// deadlock a two-player game, so stdin gets its own impl.
pub trait LineSource {
    /// Read one line into `buf`, returning `Ok(0)` at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Stdin handle that takes the lock one line at a time, so both seats of
/// a two-player game can read from the same stream.
pub struct SharedStdin {
    stdin: io::Stdin,
}

impl SharedStdin {
    pub fn new() -> Self {
        SharedStdin { stdin: io::stdin() }
    }
}

impl Default for SharedStdin {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for SharedStdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.stdin.read_line(buf)
    }
}

/// Resolve a trimmed move token against the current position: the token
/// grammar is checked first, without consulting the board, then the named
/// cell is checked for legality.
pub fn resolve_move(token: &str, state: &GameState) -> Result<Coord, InputError> {
    let coord: Coord = token
        .parse()
        .map_err(|_| InputError::Format(token.to_string()))?;
    if state.is_legal(coord) {
        Ok(coord)
    } else {
        Err(InputError::Illegal(coord))
    }
}

/// Console move source: prompts, reads a line, and keeps asking until the
/// input resolves to a legal move. Reader and writer are injected so the
/// prompt loop can be driven from tests.
pub struct HumanInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: LineSource, W: Write> HumanInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        HumanInput { reader, writer }
    }
}

impl<R: LineSource, W: Write> MoveSource for HumanInput<R, W> {
    fn next_move(&mut self, state: &GameState) -> Result<Coord, PlayError> {
        loop {
            write!(
                self.writer,
                "Player {}, enter your move (e.g., d3): ",
                state.current_player().glyph()
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }

            match resolve_move(line.trim(), state) {
                Ok(coord) => return Ok(coord),
                Err(InputError::Format(_)) => {
                    writeln!(
                        self.writer,
                        "Invalid input. Please enter a letter (a-h) followed by a number (1-8)."
                    )?;
                }
                Err(InputError::Illegal(_)) => {
                    writeln!(self.writer, "Invalid move. Please try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
