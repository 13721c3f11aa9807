//! Move legality and flip counting.
//!
//! A placement flips every contiguous run of opponent pieces that ends in one
//! of the mover's own pieces. Runs that reach the edge of the board or an
//! empty cell flip nothing.
//!
//! All queries return their "nothing found" value (`false` or `0`) on an
//! invalid board. On a valid board, passing a location outside the grid is a
//! caller bug and panics.

use crate::{Board, Cell, Direction, Location};
use arrayvec::ArrayVec;

/// Flips contributed by each direction of a placement, omitting directions that flip nothing.
pub type FlipBreakdown = ArrayVec<[(Direction, u32); 8]>;

impl Board {
    #[inline]
    fn own_piece(&self) -> Cell {
        Cell::from(self.mover())
    }

    #[inline]
    fn opponent_piece(&self) -> Cell {
        Cell::from(!self.mover())
    }

    fn assert_on_board(&self, loc: Location) {
        assert!(
            self.contains(loc),
            "location {:?} is outside a {}x{} board",
            loc,
            self.rows(),
            self.columns()
        );
    }

    /// Returns whether the mover *might* be able to play at `loc`: the cell is
    /// empty and touches at least one opponent piece.
    ///
    /// This does not guarantee any flips. Use [`Board::flip_count`] to check.
    pub fn can_play_at(&self, loc: Location) -> bool {
        if !self.is_valid() {
            return false;
        }
        self.assert_on_board(loc);

        if self.cell(loc) != Cell::Empty {
            return false;
        }

        let opponent = self.opponent_piece();
        Direction::ALL.iter().any(|&direction| {
            self.neighbor(loc, direction)
                .map_or(false, |next| self.cell(next) == opponent)
        })
    }

    /// Count the opponent pieces flipped toward `direction` by the mover's piece at `origin`.
    /// Returns 0 if `origin` does not hold the mover's piece.
    pub fn flips_in_direction(&self, origin: Location, direction: Direction) -> u32 {
        if !self.is_valid() {
            return 0;
        }
        self.assert_on_board(origin);

        if self.cell(origin) != self.own_piece() {
            return 0;
        }
        self.run_length(origin, direction)
    }

    /// Count all opponent pieces flipped by the mover's piece at `origin`.
    /// Returns 0 if `origin` does not hold the mover's piece.
    pub fn flips_at(&self, origin: Location) -> u32 {
        if !self.is_valid() {
            return 0;
        }
        self.assert_on_board(origin);

        if self.cell(origin) != self.own_piece() {
            return 0;
        }
        self.total_run_length(origin)
    }

    /// Count the opponent pieces the mover would flip by playing at the empty cell `loc`.
    /// Returns 0 for an occupied cell.
    ///
    /// Equivalent to placing the piece and calling [`Board::flips_at`], without
    /// touching the board: runs never read their origin cell.
    pub fn flip_count(&self, loc: Location) -> u32 {
        if !self.is_valid() {
            return 0;
        }
        self.assert_on_board(loc);

        if self.cell(loc) != Cell::Empty {
            return 0;
        }
        self.total_run_length(loc)
    }

    /// Split [`Board::flip_count`] by direction.
    pub fn flip_breakdown(&self, loc: Location) -> FlipBreakdown {
        if !self.is_valid() {
            return FlipBreakdown::new();
        }
        self.assert_on_board(loc);

        if self.cell(loc) != Cell::Empty {
            return FlipBreakdown::new();
        }

        Direction::ALL
            .iter()
            .map(|&direction| (direction, self.run_length(loc, direction)))
            .filter(|&(_, flips)| flips > 0)
            .collect()
    }

    fn total_run_length(&self, origin: Location) -> u32 {
        Direction::ALL
            .iter()
            .map(|&direction| self.run_length(origin, direction))
            .sum()
    }

    /// Length of the opponent run starting next to `origin`, if it is capped by
    /// the mover's own piece; 0 otherwise. Never reads `origin` itself.
    fn run_length(&self, origin: Location, direction: Direction) -> u32 {
        let own = self.own_piece();
        let mut count = 0;
        let mut cursor = origin;

        while let Some(next) = self.neighbor(cursor, direction) {
            match self.cell(next) {
                Cell::Empty => return 0,
                cell if cell == own => return count,
                _ => count += 1,
            }
            cursor = next;
        }

        // Ran off the board before finding our own piece.
        0
    }
}
