//! The board model: a rectangular grid of [`Cell`]s and the player to move.
//!
//! Cells are stored in a flat row-major buffer. A [`Board`] of any size can be
//! built, but only one satisfying [`Board::is_valid`] is ever reasoned about.

use crate::{utils, Direction, Location, Player, EDGE_LIMIT};
use itertools::iproduct;
use std::fmt;

/// The contents of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    /// The piece belonging to `player`.
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Cell {
    /// Read a cell from its text symbol. Anything but 'B' or 'W' is empty.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'B' => Cell::Black,
            'W' => Cell::White,
            _ => Cell::Empty,
        }
    }

    /// The text symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Black => Player::Black.symbol(),
            Cell::White => Player::White.symbol(),
        }
    }
}

/// A position to evaluate: the grid, its size, and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    title: String,
    columns: usize,
    rows: usize,
    mover: Player,
    cells: Vec<Cell>,
}

impl Board {
    /// Construct an empty board.
    /// Dimensions are not checked here; see [`Board::is_valid`].
    pub fn new(title: impl Into<String>, columns: usize, rows: usize, mover: Player) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
            mover,
            cells: vec![Cell::Empty; columns * rows],
        }
    }

    /// Returns whether the board's dimensions are within `1..EDGE_LIMIT`.
    /// Every query on an invalid board reports that nothing was found.
    #[inline]
    pub fn is_valid(&self) -> bool {
        Self::is_valid_size(self.columns, self.rows)
    }

    /// Returns whether a board of this size would be valid.
    #[inline]
    pub fn is_valid_size(columns: usize, rows: usize) -> bool {
        (1..EDGE_LIMIT).contains(&columns) && (1..EDGE_LIMIT).contains(&rows)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The player whose move is being evaluated.
    pub fn mover(&self) -> Player {
        self.mover
    }

    pub fn set_mover(&mut self, mover: Player) {
        self.mover = mover;
    }

    /// Returns whether `loc` lies on the board.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.row < self.rows && loc.column < self.columns
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        assert!(
            self.contains(loc),
            "location ({}, {}) is outside a {}x{} board",
            loc.row,
            loc.column,
            self.rows,
            self.columns
        );
        loc.row * self.columns + loc.column
    }

    /// Get the cell at `loc`. Panics if `loc` is off the board.
    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        self.cells[self.index(loc)]
    }

    /// Overwrite the cell at `loc`. Panics if `loc` is off the board.
    pub fn set(&mut self, loc: Location, cell: Cell) {
        let index = self.index(loc);
        self.cells[index] = cell;
    }

    /// The neighbour of `loc` one step in `direction`, if it is on the board.
    #[inline]
    pub fn neighbor(&self, loc: Location, direction: Direction) -> Option<Location> {
        loc.step(direction).filter(|&next| self.contains(next))
    }

    /// Iterate over every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        iproduct!(0..self.rows, 0..self.columns).map(|(row, column)| Location::new(row, column))
    }

    /// Iterate over the cells of one row, left to right.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = row * self.columns;
        self.cells[start..start + self.columns].iter().copied()
    }
}

/// Pretty-print the title and a labelled grid.
/// Invalid boards print nothing.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return Ok(());
        }

        write!(f, "{}\n\n", self.title)?;
        utils::format_grid(self.cells.iter().map(|cell| cell.symbol()), self.columns, f)
    }
}
