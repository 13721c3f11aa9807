//! `flank-reversi` finds the Reversi move that flips the most opponent pieces.
//!
//! The crate is split the same way a move is evaluated:
//!
//!  - [`Board`] holds a rectangular grid of [`Cell`]s and the [`Player`] to move.
//!    Boards up to 25x25 are supported; anything else is *invalid* and every
//!    query on it reports "nothing found" instead of failing.
//!  - [`rules`] decides whether a cell is a candidate and counts flips, one
//!    [`Direction`] at a time or across all eight.
//!  - [`search`] scans the whole board for the greedy best move.
//!  - [`text`] reads and writes the line-oriented position format.
//!
//! ```
//! use flank_reversi::{test_utils::positions, Location};
//!
//! let board = positions::standard_opening();
//! let best = board.best_move().unwrap();
//! assert_eq!(best.location, Location::new(2, 3));
//! assert_eq!(best.flips, 1);
//! ```

pub mod rules;
pub mod search;
pub mod test_utils;
pub mod text;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use search::ScoredMove;

/// Exclusive upper bound on both board dimensions.
/// Columns are labelled with single letters, so a board never reaches 26.
pub const EDGE_LIMIT: usize = 26;
