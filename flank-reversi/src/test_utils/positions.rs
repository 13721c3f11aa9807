//! Hand-built positions with known answers.

use crate::{Board, Cell, Location, Player};

/// Build a board from rows of cell symbols. Short rows are padded with empties.
pub fn from_rows(title: &str, mover: Player, rows: &[&str]) -> Board {
    let columns = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut board = Board::new(title, columns, rows.len(), mover);
    for (row, line) in rows.iter().enumerate() {
        for (column, symbol) in line.chars().enumerate() {
            board.set(Location::new(row, column), Cell::from_symbol(symbol));
        }
    }
    board
}

/// The 8x8 starting position with Black to move.
pub fn standard_opening() -> Board {
    from_rows(
        "Standard opening",
        Player::Black,
        &[
            "        ", //
            "        ",
            "        ",
            "   WB   ",
            "   BW   ",
            "        ",
            "        ",
            "        ",
        ],
    )
}

/// A 3x3 board where the mover's pieces surround the only empty cell.
pub fn surrounded_by_own_pieces() -> Board {
    from_rows(
        "Surrounded",
        Player::White,
        &[
            "WWW", //
            "W W",
            "WWW",
        ],
    )
}

/// A line of five White pieces capped by Black on one end, with Black to move.
/// Playing at the open end (g1) flips all five.
pub fn capped_line() -> Board {
    from_rows("Capped line", Player::Black, &["BWWWWW ", "       "])
}
