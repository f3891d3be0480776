//! Turn parity invariant: X moves first and turns alternate strictly.

use super::Invariant;
use crate::types::{Board, Player, Square};

/// Invariant: the X count minus the O count is 0 or 1.
///
/// X moves first and turns alternate, so X is never behind O and never
/// more than one mark ahead. Any other count means a mark was placed
/// out of turn or an exploratory placement leaked.
pub struct TurnParityInvariant;

impl Invariant<Board> for TurnParityInvariant {
    fn holds(board: &Board) -> bool {
        let count = |player: Player| {
            board
                .squares()
                .iter()
                .filter(|square| **square == Square::Occupied(player))
                .count()
        };

        let x = count(Player::X);
        let o = count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_board_holds() {
        assert!(TurnParityInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_alternating_marks_hold() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        assert!(TurnParityInvariant::holds(&board));

        board.place(Position::Center, Player::O).unwrap();
        assert!(TurnParityInvariant::holds(&board));
    }

    #[test]
    fn test_double_x_violates() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::TopCenter, Player::X).unwrap();
        assert!(!TurnParityInvariant::holds(&board));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut board = Board::new();
        board.place(Position::Center, Player::O).unwrap();
        assert!(!TurnParityInvariant::holds(&board));
    }
}
