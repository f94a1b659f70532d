//! Tests for board positions and coordinate conversion.

use noughts_engine::{Board, Player, Position};

#[test]
fn index_round_trips() {
    for (i, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.index(), i);
        assert_eq!(Position::from_index(i), Some(*pos));
    }
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn row_col_round_trips() {
    assert_eq!(Position::TopLeft.row(), 0);
    assert_eq!(Position::TopLeft.col(), 0);
    assert_eq!(Position::MiddleRight.row(), 1);
    assert_eq!(Position::MiddleRight.col(), 2);
    assert_eq!(Position::from_row_col(2, 1), Some(Position::BottomCenter));
    assert_eq!(Position::from_row_col(3, 0), None);
    assert_eq!(Position::from_row_col(0, 7), None);
}

#[test]
fn valid_moves_on_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn valid_moves_filters_occupied() {
    let board = Board::new()
        .place(Position::TopLeft, Player::X)
        .place(Position::Center, Player::O);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
