//! The read-evaluate-print loop over a stream of positions.

use crate::{Report, ReportOptions};
use flank_reversi::text::{BoardReader, ReadBoardError};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const ROUND_SEPARATOR_WIDTH: usize = 80;

/// What happened over a whole session.
#[derive(Debug, Default)]
pub struct SessionSummary {
    /// Number of positions evaluated.
    pub evaluated: usize,
    /// The error that ended the session early, if any.
    pub read_error: Option<ReadBoardError>,
}

/// Evaluates every position from `input` and writes the reports to `output`.
pub struct Session<R, W> {
    reader: BoardReader<R>,
    output: W,
    options: ReportOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: ReportOptions) -> Self {
        Self {
            reader: BoardReader::new(input),
            output,
            options,
        }
    }

    /// Run until the input is exhausted or a position cannot be read.
    /// Unreadable input ends the session like the end of input does; only
    /// failures to write are returned as errors.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let board = match self.reader.read_board() {
                Ok(Some(board)) => board,
                Ok(None) => break,
                Err(err) => {
                    warn!(%err, "stopping at unreadable position");
                    summary.read_error = Some(err);
                    break;
                }
            };

            info!(
                round = summary.evaluated + 1,
                title = board.title(),
                "evaluating position"
            );
            write!(self.output, "{}", Report::evaluate(&board, self.options))?;
            writeln!(self.output, "{}", "=".repeat(ROUND_SEPARATOR_WIDTH))?;
            writeln!(self.output)?;
            summary.evaluated += 1;
        }

        write!(self.output, "\n*** END OF PROCESSING ***\n\n")?;
        self.output.flush()?;
        Ok(summary)
    }

    /// Give back the output, e.g. to inspect an in-memory buffer.
    pub fn into_output(self) -> W {
        self.output
    }
}
