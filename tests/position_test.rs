//! Tests for the position enum.

use tictactoe_engine::{Board, OutOfBounds, Player, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_coordinates() {
    assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (0, 0));
    assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
    assert_eq!(
        (Position::BottomLeft.row(), Position::BottomLeft.col()),
        (2, 0)
    );
}

#[test]
fn test_from_coords_accepts_grid() {
    assert_eq!(Position::from_coords(0, 0), Ok(Position::TopLeft));
    assert_eq!(Position::from_coords(2, 1), Ok(Position::BottomCenter));
}

#[test]
fn test_from_coords_rejects_out_of_bounds() {
    assert_eq!(
        Position::from_coords(3, 1),
        Err(OutOfBounds { row: 3, col: 1 })
    );
    assert_eq!(
        Position::from_coords(1, usize::MAX),
        Err(OutOfBounds { row: 1, col: usize::MAX })
    );
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
    assert_eq!(
        Position::from_label_or_number("top-left"),
        Some(Position::TopLeft)
    );
    assert_eq!(Position::from_label_or_number("nowhere"), None);
    assert_eq!(Position::from_label_or_number("9"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
    assert_eq!(valid, Position::ALL.to_vec());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Player::X).unwrap();
    board.place(Position::Center, Player::O).unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
