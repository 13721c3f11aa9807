//! Known positions and edge cases for the move search.

use flank_reversi::search::as_triple;
use flank_reversi::test_utils::positions;
use flank_reversi::{Board, Cell, Direction, Location, Player, ScoredMove};

#[test]
fn standard_opening_moves_flip_one() {
    let board = positions::standard_opening();
    let opening_moves = ["d3", "c4", "f5", "e6"];

    for mv in opening_moves.iter() {
        let loc: Location = mv.parse().unwrap();
        assert!(board.can_play_at(loc), "{}", mv);
        assert_eq!(board.flip_count(loc), 1, "{}", mv);
    }

    assert_eq!(as_triple(board.best_move()), (2, 3, 1));
}

#[test]
fn surrounded_mover_has_no_move() {
    let board = positions::surrounded_by_own_pieces();
    assert!(!board.can_play_at(Location::new(1, 1)));
    assert_eq!(as_triple(board.best_move()), (-1, -1, 0));
}

#[test]
fn capped_line_flips_five_one_way() {
    let board = positions::capped_line();
    let open_end = Location::new(0, 6);

    assert_eq!(board.flip_count(open_end), 5);
    assert_eq!(
        board.flip_breakdown(open_end).as_slice(),
        &[(Direction::WEST, 5)]
    );

    let mut placed = board.clone();
    placed.set(open_end, Cell::Black);
    for &direction in Direction::ALL.iter() {
        let expected = if direction == Direction::WEST { 5 } else { 0 };
        assert_eq!(
            placed.flips_in_direction(open_end, direction),
            expected,
            "{}",
            direction
        );
    }

    assert_eq!(
        board.best_move(),
        Some(ScoredMove {
            location: open_end,
            flips: 5
        })
    );
}

#[test]
fn rays_leaving_the_board_count_zero() {
    let mut board = Board::new("corner", 3, 3, Player::Black);
    let corner = Location::new(0, 0);
    board.set(corner, Cell::Black);
    board.set(Location::new(1, 1), Cell::White);

    for direction in [
        Direction::NORTH_WEST,
        Direction::NORTH,
        Direction::NORTH_EAST,
        Direction::WEST,
        Direction::SOUTH_WEST,
    ]
    .iter()
    {
        assert_eq!(board.flips_in_direction(corner, *direction), 0);
    }
}

#[test]
fn single_row_board() {
    let mut board = Board::new("row", 25, 1, Player::White);
    for column in 1..24 {
        board.set(Location::new(0, column), Cell::Black);
    }
    board.set(Location::new(0, 24), Cell::White);

    // Every vertical and diagonal ray leaves the board immediately.
    for loc in board.locations() {
        assert!(board.flip_breakdown(loc).iter().all(|(d, _)| d.row() == 0));
    }
    assert_eq!(
        board.best_move(),
        Some(ScoredMove {
            location: Location::new(0, 0),
            flips: 23
        })
    );
}

#[test]
fn single_column_board() {
    let mut board = Board::new("column", 1, 25, Player::Black);
    board.set(Location::new(12, 0), Cell::White);
    board.set(Location::new(13, 0), Cell::Black);

    for loc in board.locations() {
        assert!(board.flip_breakdown(loc).iter().all(|(d, _)| d.column() == 0));
    }
    assert_eq!(as_triple(board.best_move()), (11, 0, 1));
}

#[test]
fn one_by_one_board() {
    let mut board = Board::new("dot", 1, 1, Player::Black);
    assert!(board.is_valid());
    assert!(!board.can_play_at(Location::new(0, 0)));
    assert_eq!(board.best_move(), None);

    board.set(Location::new(0, 0), Cell::Black);
    for &direction in Direction::ALL.iter() {
        assert_eq!(board.flips_in_direction(Location::new(0, 0), direction), 0);
    }
}

#[test]
fn largest_board() {
    let mut board = Board::new("large", 25, 25, Player::Black);
    board.set(Location::new(24, 24), Cell::Black);
    for i in 1..24 {
        board.set(Location::new(i, i), Cell::White);
    }

    assert_eq!(as_triple(board.best_move()), (0, 0, 23));
}

#[test]
fn mismatched_dimensions_are_not_transposed() {
    // 2 rows, 6 columns. An opponent piece at the far right must still be seen,
    // even though its column is beyond the row count.
    let board = positions::from_rows("wide", Player::Black, &["    WB", "      "]);
    assert!(board.can_play_at(Location::new(0, 3)));
    assert!(board.can_play_at(Location::new(1, 4)));
    assert_eq!(board.flip_count(Location::new(0, 3)), 1);
}
