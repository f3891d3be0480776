//! Authoritative game state: board, side to move, and move history.
//!
//! The engine itself never owns a board; [`Game`] is the caller-side
//! state machine a presentation layer would otherwise keep in its event
//! loop, packaged as a library type so the full move loop is testable
//! without one.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::search::{self, SearchError};
use crate::types::{Board, Outcome, PlaceError, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A tic-tac-toe game with strict turn alternation.
///
/// X moves first. The board is only ever mutated through validated
/// moves; the engine borrows it during [`Game::engine_move`] and
/// restores it before the chosen move is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Validates and applies a move, returning the fresh outcome.
    ///
    /// Preconditions are checked in order: the game must not be over,
    /// it must be the acting player's turn, and the square must be
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`], [`MoveError::WrongPlayer`], or
    /// [`MoveError::SquareOccupied`] when the corresponding precondition
    /// fails. All three are caller sequencing errors, not recoverable
    /// runtime conditions.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        self.board
            .place(mov.position, mov.player)
            .map_err(|PlaceError::SquareOccupied(position)| {
                MoveError::SquareOccupied(position)
            })?;

        self.history.push(mov);
        self.to_move = self.to_move.opponent();

        if let Err(violations) = GameInvariants::check_all(&self.board) {
            warn!(?violations, "board invariants violated after move");
            debug_assert!(false, "board invariants violated: {violations:?}");
        }

        Ok(self.outcome())
    }

    /// Computes and applies the optimal move for the side to move.
    ///
    /// The computer turn as one call: ask the search for a move, then
    /// apply it to the authoritative board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game is already decided.
    #[instrument(skip(self))]
    pub fn engine_move(&mut self) -> Result<(Move, Outcome), MoveError> {
        let position = search::choose_move(&mut self.board, self.to_move)
            .map_err(|SearchError::NoMoveAvailable| MoveError::GameOver)?;

        let mov = Move::new(self.to_move, position);
        let outcome = self.make_move(mov)?;
        Ok((mov, outcome))
    }

    /// Rebuilds a game by applying a recorded move sequence.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit while replaying; a record
    /// produced by [`Game::history`] always replays cleanly.
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &mov in moves {
            game.make_move(mov)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
