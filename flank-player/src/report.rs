//! Human-readable output for one evaluated position.

use flank_reversi::{Board, ScoredMove};
use itertools::Itertools;
use std::fmt;

/// Optional sections of a [`Report`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// List the flips of the best move by direction.
    pub explain: bool,
    /// List every legal move with its flip count.
    pub all_moves: bool,
}

/// The board followed by its best move.
pub struct Report<'a> {
    board: &'a Board,
    best: Option<ScoredMove>,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(board: &'a Board, best: Option<ScoredMove>, options: ReportOptions) -> Self {
        Self {
            board,
            best,
            options,
        }
    }

    /// Search `board` and report the result.
    pub fn evaluate(board: &'a Board, options: ReportOptions) -> Self {
        Self::new(board, board.best_move(), options)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mover = self.board.mover();
        write!(f, "{}\n", self.board)?;

        match self.best {
            Some(best) => {
                writeln!(
                    f,
                    "The best move for {} is ({}, {}), which will reverse {} opponent piece(s)",
                    mover,
                    best.location.column_label(),
                    best.location.row + 1,
                    best.flips
                )?;
                if self.options.explain {
                    for (direction, flips) in self.board.flip_breakdown(best.location) {
                        writeln!(f, "  toward {}: {}", direction, flips)?;
                    }
                }
            }
            None => writeln!(f, "{} has no move that reverses any opponent piece", mover)?,
        }

        if self.options.all_moves {
            let moves = self.board.legal_moves();
            if moves.is_empty() {
                writeln!(f, "Legal moves: none")?;
            } else {
                let listed = moves
                    .iter()
                    .map(|mv| format!("{} ({})", mv.location, mv.flips))
                    .join(", ");
                writeln!(f, "Legal moves: {}", listed)?;
            }
        }

        writeln!(f)
    }
}
