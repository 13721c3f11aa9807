//! Reading and writing positions in the line-oriented text format.
//!
//! A position is a title line, a header line `<columns> <rows> <player>`,
//! one line per board row, and a terminating (normally blank) line:
//!
//! ```text
//! Corner fight
//! 4 2 W
//! BWW
//!  BB
//!
//! ```
//!
//! The player is White if its token starts with 'W' and Black otherwise.
//! In grid lines 'B' and 'W' are pieces and every other byte is empty;
//! bytes past the last column are ignored and short lines are padded.

use crate::{Board, Cell, Location, Player, EDGE_LIMIT};
use derive_more::{Display, Error};
use std::fmt;
use std::io::{self, BufRead};
use tracing::debug;

#[derive(Debug, Display, Error)]
pub enum ReadBoardError {
    #[display(fmt = "cannot read position: {}", _0)]
    Io(io::Error),
    #[display(fmt = "line {}: input ends before the {}", line, expected)]
    UnexpectedEnd { line: usize, expected: &'static str },
    #[display(fmt = "line {}: expected \"<columns> <rows> <player>\"", line)]
    MalformedHeader { line: usize },
    #[display(
        fmt = "line {}: a {}x{} board is outside 1..{} on some edge",
        line,
        columns,
        rows,
        EDGE_LIMIT
    )]
    InvalidDimensions {
        line: usize,
        columns: usize,
        rows: usize,
    },
    #[display(fmt = "no position found")]
    MissingBoard,
}

impl From<io::Error> for ReadBoardError {
    fn from(err: io::Error) -> Self {
        ReadBoardError::Io(err)
    }
}

/// Reads consecutive positions from a buffered input.
///
/// Lines are read as raw bytes: the title is decoded lossily and grid bytes
/// other than `B` and `W` are empty, so input need not be UTF-8.
pub struct BoardReader<R> {
    input: R,
    line: usize,
    buffer: Vec<u8>,
    failed: bool,
}

impl<R: BufRead> BoardReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: 0,
            buffer: Vec::new(),
            failed: false,
        }
    }

    /// The number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next position.
    /// Returns Ok(None) if the input ends cleanly before a title line.
    pub fn read_board(&mut self) -> Result<Option<Board>, ReadBoardError> {
        let title = match self.next_line()? {
            Some(title) => String::from_utf8_lossy(title).into_owned(),
            None => return Ok(None),
        };

        let header = self.expect_line("header line")?;
        let (columns, rows, mover) = parse_header(header).ok_or(ReadBoardError::MalformedHeader {
            line: self.line,
        })?;

        if !Board::is_valid_size(columns, rows) {
            return Err(ReadBoardError::InvalidDimensions {
                line: self.line,
                columns,
                rows,
            });
        }

        let mut board = Board::new(title, columns, rows, mover);
        for row in 0..rows {
            let line = self.expect_line("last board row")?;
            for (column, &symbol) in line.iter().take(columns).enumerate() {
                board.set(Location::new(row, column), Cell::from_symbol(char::from(symbol)));
            }
        }

        // The terminator is discarded whatever it holds, and may be missing at the end of input.
        if let Some(terminator) = self.next_line()? {
            if !terminator.iter().all(u8::is_ascii_whitespace) {
                debug!(line = self.line, "discarding non-blank terminator line");
            }
        }

        Ok(Some(board))
    }

    fn next_line(&mut self) -> Result<Option<&[u8]>, ReadBoardError> {
        self.buffer.clear();
        if self.input.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let line = self.buffer.strip_suffix(b"\n").unwrap_or(&self.buffer[..]);
        Ok(Some(line.strip_suffix(b"\r").unwrap_or(line)))
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<&[u8], ReadBoardError> {
        let line = self.line + 1;
        self.next_line()?
            .ok_or(ReadBoardError::UnexpectedEnd { line, expected })
    }
}

/// Yields positions until the input ends or an error has been yielded.
impl<R: BufRead> Iterator for BoardReader<R> {
    type Item = Result<Board, ReadBoardError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.read_board().transpose();
        self.failed = matches!(result, Some(Err(_)));
        result
    }
}

/// Parse `<columns> <rows> [player]`. Anything after the player token is ignored.
fn parse_header(header: &[u8]) -> Option<(usize, usize, Player)> {
    let header = std::str::from_utf8(header).ok()?;
    let mut tokens = header.split_whitespace();
    let columns = tokens.next()?.parse().ok()?;
    let rows = tokens.next()?.parse().ok()?;
    let mover = tokens.next().map_or(Player::Black, Player::from_token);
    Some((columns, rows, mover))
}

/// Parse the first position in a string.
impl std::str::FromStr for Board {
    type Err = ReadBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardReader::new(s.as_bytes())
            .read_board()?
            .ok_or(ReadBoardError::MissingBoard)
    }
}

/// Writes a board in the text format, terminator line included.
pub struct LegacyText<'a>(pub &'a Board);

impl fmt::Display for LegacyText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "{}", board.title())?;
        writeln!(
            f,
            "{} {} {}",
            board.columns(),
            board.rows(),
            board.mover().symbol()
        )?;
        for row in 0..board.rows() {
            let line: String = board.row_cells(row).map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}
