//! Code for working with [`Location`]s and [`Direction`]s on the board.

use crate::EDGE_LIMIT;
use std::fmt::{self, Display, Formatter, Write};

const COLUMN_LABELS: &str = "abcdefghijklmnopqrstuvwxyz";

/// A cell on the board, by 0-based row and column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

/// One of the eight unit steps between neighbouring cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    row: i8,
    column: i8,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The letter labelling this location's column ('a' for column 0).
    pub fn column_label(self) -> char {
        assert!(self.column < EDGE_LIMIT);
        COLUMN_LABELS.as_bytes()[self.column] as char
    }

    /// Take one step in `direction`.
    /// Returns None if the step would go above the first row or left of the first column;
    /// the far edges depend on the board and are checked by it.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        Some(Self {
            row: offset(self.row, direction.row)?,
            column: offset(self.column, direction.column)?,
        })
    }
}

#[inline]
fn offset(index: usize, delta: i8) -> Option<usize> {
    match delta {
        -1 => index.checked_sub(1),
        0 => Some(index),
        _ => index.checked_add(1),
    }
}

/// Convert this [`Location`] into string notation ("d3").
/// Panics, like [`Location::column_label`], if the column has no letter.
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.column_label())?;
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from a 1-indexed string notation ("d3", "Y25").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_lowercase();
        let column = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row: usize = chars.as_str().parse().or(Err(ParseLocationError))?;

        if row == 0 || row >= EDGE_LIMIT || column >= EDGE_LIMIT - 1 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row - 1, column))
    }
}

impl Direction {
    pub const NORTH_WEST: Self = Self { row: -1, column: -1 };
    pub const NORTH: Self = Self { row: -1, column: 0 };
    pub const NORTH_EAST: Self = Self { row: -1, column: 1 };
    pub const WEST: Self = Self { row: 0, column: -1 };
    pub const EAST: Self = Self { row: 0, column: 1 };
    pub const SOUTH_WEST: Self = Self { row: 1, column: -1 };
    pub const SOUTH: Self = Self { row: 1, column: 0 };
    pub const SOUTH_EAST: Self = Self { row: 1, column: 1 };

    /// All eight directions, in row-major order of their offsets.
    pub const ALL: [Self; 8] = [
        Self::NORTH_WEST,
        Self::NORTH,
        Self::NORTH_EAST,
        Self::WEST,
        Self::EAST,
        Self::SOUTH_WEST,
        Self::SOUTH,
        Self::SOUTH_EAST,
    ];

    /// Build a direction from row and column offsets, each in -1..=1.
    /// Returns None for the zero vector or out-of-range offsets.
    pub fn new(row: i8, column: i8) -> Option<Self> {
        let in_range = |d: i8| (-1..=1).contains(&d);
        if !in_range(row) || !in_range(column) || (row == 0 && column == 0) {
            None
        } else {
            Some(Self { row, column })
        }
    }

    /// The row offset of one step.
    pub fn row(self) -> i8 {
        self.row
    }

    /// The column offset of one step.
    pub fn column(self) -> i8 {
        self.column
    }
}

/// Compass notation, with north towards row 0.
impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.row {
            -1 => f.write_char('N')?,
            1 => f.write_char('S')?,
            _ => {}
        }
        match self.column {
            -1 => f.write_char('W'),
            1 => f.write_char('E'),
            _ => Ok(()),
        }
    }
}
