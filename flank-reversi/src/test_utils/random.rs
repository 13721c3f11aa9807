use crate::{Board, Cell, Location, Player};
use rand::Rng;

/// Generate a board of the given size where each cell is occupied with probability `density`,
/// split evenly between the colours. The mover is chosen at random.
pub fn random_board<R: Rng>(rng: &mut R, columns: usize, rows: usize, density: f64) -> Board {
    let mover = if rng.gen_bool(0.5) {
        Player::Black
    } else {
        Player::White
    };
    let mut board = Board::new(format!("Random {}x{}", columns, rows), columns, rows, mover);

    for row in 0..rows {
        for column in 0..columns {
            let cell = if !rng.gen_bool(density) {
                Cell::Empty
            } else if rng.gen_bool(0.5) {
                Cell::Black
            } else {
                Cell::White
            };
            board.set(Location::new(row, column), cell);
        }
    }

    board
}
