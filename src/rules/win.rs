//! Win detection logic.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// True iff `player` occupies a full row, full column, or either diagonal.
///
/// Exactly 3 rows, 3 columns, and the 2 diagonals count as lines; the
/// anti-diagonal runs through `(i, 2 - i)`.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    let at = |row: usize, col: usize| board.squares()[row * 3 + col] == mark;

    for i in 0..3 {
        if (0..3).all(|j| at(i, j)) || (0..3).all(|j| at(j, i)) {
            return true;
        }
    }

    (0..3).all(|i| at(i, i)) || (0..3).all(|i| at(i, 2 - i))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_line(board, player))
}
