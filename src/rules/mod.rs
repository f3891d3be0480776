//! Rules for classifying board states.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, has_line};

use crate::types::{Board, Outcome, Player};
use tracing::instrument;

impl Board {
    /// True iff `player` occupies a full row, column, or diagonal.
    pub fn has_won(&self, player: Player) -> bool {
        win::has_line(self, player)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        win::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        draw::is_full(self)
    }

    /// Classifies the board into an [`Outcome`].
    ///
    /// Checks O's lines, then X's lines, then fullness. A board reached
    /// through legal play never satisfies two of these at once, so the
    /// order matters for derivation but not for result uniqueness.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        if self.has_won(Player::O) {
            return Outcome::Won(Player::O);
        }
        if self.has_won(Player::X) {
            return Outcome::Won(Player::X);
        }
        if self.is_full() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }
}
