//! Greedy best-move search.
//!
//! Every cell is tried in row-major order and the one flipping the most
//! opponent pieces wins. Ties go to the first cell scanned.

use crate::{Board, Location};
use std::fmt;
use tracing::{debug, instrument, trace};

/// A placement and the number of opponent pieces it flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    pub location: Location,
    pub flips: u32,
}

impl fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} flips)", self.location, self.flips)
    }
}

impl Board {
    /// Find the move flipping the most opponent pieces for the mover.
    /// Returns None if the board is invalid or no move flips anything.
    #[instrument(level = "debug", skip(self), fields(title = %self.title(), mover = %self.mover()))]
    pub fn best_move(&self) -> Option<ScoredMove> {
        if !self.is_valid() {
            debug!(
                rows = self.rows(),
                columns = self.columns(),
                "skipping search on invalid board"
            );
            return None;
        }

        let mut best: Option<ScoredMove> = None;
        for candidate in self.scored_candidates() {
            if candidate.flips > best.map_or(0, |b| b.flips) {
                best = Some(candidate);
            }
        }

        debug!(best = ?best, "search finished");
        best
    }

    /// List every move that flips at least one piece, in row-major order.
    pub fn legal_moves(&self) -> Vec<ScoredMove> {
        if !self.is_valid() {
            return Vec::new();
        }

        self.scored_candidates()
            .filter(|candidate| candidate.flips > 0)
            .collect()
    }

    /// Score every candidate cell, in row-major order.
    fn scored_candidates(&self) -> impl Iterator<Item = ScoredMove> + '_ {
        self.locations()
            .filter(move |&location| self.can_play_at(location))
            .map(move |location| {
                let flips = self.flip_count(location);
                trace!(%location, flips, "scored candidate");
                ScoredMove { location, flips }
            })
    }
}

/// Express a search result as `(row, column, flips)`, using `(-1, -1, 0)` when there is no move.
pub fn as_triple(result: Option<ScoredMove>) -> (isize, isize, u32) {
    match result {
        Some(mv) => (mv.location.row as isize, mv.location.column as isize, mv.flips),
        None => (-1, -1, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::positions;
    use crate::{Cell, Player};

    #[test]
    fn opening_picks_first_in_row_major_order() {
        let board = positions::standard_opening();
        let best = board.best_move();
        assert_eq!(
            best,
            Some(ScoredMove {
                location: Location::new(2, 3),
                flips: 1
            })
        );
        assert_eq!(as_triple(best), (2, 3, 1));
    }

    #[test]
    fn opening_for_white() {
        let mut board = positions::standard_opening();
        board.set_mover(Player::White);
        assert_eq!(board.best_move().map(|m| m.location), Some(Location::new(2, 4)));
    }

    #[test]
    fn opening_legal_moves() {
        let moves: Vec<String> = positions::standard_opening()
            .legal_moves()
            .iter()
            .map(|m| m.location.to_string())
            .collect();
        assert_eq!(moves, ["d3", "c4", "f5", "e6"]);
    }

    #[test]
    fn prefers_more_flips_over_scan_order() {
        let mut board = Board::new("", 6, 2, Player::Black);
        // Row 0 offers one flip at a1; row 1 offers three at f2.
        for (loc, cell) in [
            (Location::new(0, 1), Cell::White),
            (Location::new(0, 2), Cell::Black),
            (Location::new(1, 1), Cell::Black),
            (Location::new(1, 2), Cell::White),
            (Location::new(1, 3), Cell::White),
            (Location::new(1, 4), Cell::White),
        ]
        .iter()
        {
            board.set(*loc, *cell);
        }

        assert_eq!(
            board.best_move(),
            Some(ScoredMove {
                location: Location::new(1, 5),
                flips: 3
            })
        );
    }

    #[test]
    fn no_opponent_means_no_move() {
        let board = positions::surrounded_by_own_pieces();
        assert_eq!(board.best_move(), None);
        assert_eq!(as_triple(board.best_move()), (-1, -1, 0));
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn candidates_without_flips_are_not_moves() {
        // White is adjacent but nothing caps the run.
        let mut board = Board::new("", 3, 1, Player::Black);
        board.set(Location::new(0, 1), Cell::White);
        assert!(board.can_play_at(Location::new(0, 0)));
        assert_eq!(board.best_move(), None);
    }

    #[test]
    fn invalid_board_has_no_move() {
        let board = Board::new("", 8, 0, Player::Black);
        assert_eq!(board.best_move(), None);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn scored_move_to_string() {
        let mv = ScoredMove {
            location: Location::new(4, 5),
            flips: 2,
        };
        assert_eq!(mv.to_string(), "f5 (2 flips)");
    }
}
