//! Tic-tac-toe decision engine.
//!
//! Exhaustive minimax search with alpha-beta pruning over a 3x3 board.
//! The crate is the computational core of a tic-tac-toe program: it
//! represents board state, classifies it, and selects the
//! game-theoretically optimal move for a side. Rendering, input handling,
//! and the event loop belong to the caller.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Player`], [`Square`], [`Position`],
//!   and the rules that classify a board into an [`Outcome`].
//! - **Search**: [`choose_move`] runs full-depth minimax with alpha-beta
//!   pruning. All exploratory placements are undone before it returns,
//!   so the caller's board is left exactly as it was passed in.
//! - **Game**: [`Game`] owns the authoritative board and enforces turn
//!   alternation for callers that want the whole move loop handled.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{choose_move, Board, Outcome, Player, Position};
//!
//! let mut board = Board::new();
//! board.place(Position::TopLeft, Player::X)?;
//!
//! let reply = choose_move(&mut board, Player::O)?;
//! board.place(reply, Player::O)?;
//! assert_eq!(board.evaluate(), Outcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, SingleWinnerInvariant,
    TurnParityInvariant,
};
pub use position::{OutOfBounds, Position};
pub use rules::{check_winner, has_line, is_full};
pub use search::{choose_move, SearchError};
pub use types::{Board, Outcome, PlaceError, Player, Square};
