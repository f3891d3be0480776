//! Minimax search with alpha-beta pruning.
//!
//! The search runs to full depth on every call; with at most 9 plies
//! there is no need for heuristics, depth cutoffs, or transposition
//! tables. Pruning only reduces the number of nodes visited, never the
//! score or the chosen move.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// One past the best achievable score, so any real score replaces it.
const INF: i32 = 2;

/// Error from asking the engine for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is terminal or full; there is no move to choose.
    #[display("no move available: the board is already decided or full")]
    NoMoveAvailable,
}

impl std::error::Error for SearchError {}

/// Scoped exploratory placement.
///
/// Clears the square when dropped, so every exit path of a recursive
/// call (including pruning cutoffs) restores the board.
struct Probe<'b> {
    board: &'b mut Board,
    position: Position,
}

impl<'b> Probe<'b> {
    fn place(board: &'b mut Board, position: Position, player: Player) -> Self {
        // Positions come from `valid_moves`, so the square is empty.
        board
            .place(position, player)
            .expect("probe position must be empty");
        Self { board, position }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Minimax value of `board` with `to_move` to play, from O's perspective.
///
/// O folds the running maximum and raises `alpha`; X folds the running
/// minimum and lowers `beta`. Once `beta <= alpha` the remaining sibling
/// moves are skipped: nothing they produce can change the value already
/// guaranteed at an ancestor.
fn search(board: &mut Board, to_move: Player, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(score) = board.evaluate().score() {
        return score;
    }

    let mut best = match to_move {
        Player::O => -INF,
        Player::X => INF,
    };

    for position in Position::valid_moves(board) {
        let mut probe = Probe::place(board, position, to_move);
        let value = search(probe.board(), to_move.opponent(), alpha, beta);
        drop(probe);

        match to_move {
            Player::O => {
                best = best.max(value);
                alpha = alpha.max(best);
            }
            Player::X => {
                best = best.min(value);
                beta = beta.min(best);
            }
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Computes the optimal move for `player` on `board`.
///
/// Scans legal moves in row-major order and keeps the first move whose
/// score strictly beats the best seen so far, so ties break toward the
/// lowest row-major position and the result is deterministic. The board
/// is returned to the caller exactly as it was passed in; applying the
/// chosen move is the caller's job.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is already
/// decided or full. That is a caller sequencing error: the caller is
/// expected to check [`Board::evaluate`] after every move.
#[instrument(skip(board))]
pub fn choose_move(board: &mut Board, player: Player) -> Result<Position, SearchError> {
    if board.evaluate().is_terminal() {
        return Err(SearchError::NoMoveAvailable);
    }

    #[cfg(debug_assertions)]
    let snapshot = board.clone();

    let mut best_score = match player {
        Player::O => -INF,
        Player::X => INF,
    };
    let mut best_move = None;

    for position in Position::valid_moves(board) {
        let mut probe = Probe::place(board, position, player);
        let score = search(probe.board(), player.opponent(), -INF, INF);
        drop(probe);

        let improves = match player {
            Player::O => score > best_score,
            Player::X => score < best_score,
        };
        if improves {
            best_score = score;
            best_move = Some(position);
        }
    }

    #[cfg(debug_assertions)]
    debug_assert_eq!(*board, snapshot, "search must restore the board");

    // An in-progress board has at least one empty square, and any real
    // score beats the initial sentinel.
    let position = best_move.expect("in-progress board has a legal move");
    debug!(%position, best_score, "selected move");
    Ok(position)
}
