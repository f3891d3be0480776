//! Position enum for addressing squares on the board.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Coordinate pair outside the 3x3 grid.
///
/// Raw `(row, col)` input enters the engine through
/// [`Position::from_coords`]; anything outside `[0, 3)` is a caller
/// contract violation surfaced as this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("coordinates ({row}, {col}) are outside the 3x3 board")]
pub struct OutOfBounds {
    /// Offending row index.
    pub row: usize,
    /// Offending column index.
    pub col: usize,
}

impl std::error::Error for OutOfBounds {}

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// A closed enum rather than a raw index pair, so every in-range square
/// is representable and nothing else is. Callers translating pointer or
/// text coordinates go through [`Position::from_coords`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from `(row, col)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] for coordinates outside `[0, 3)`. This is
    /// the fail-fast boundary for raw caller input; typed [`Position`]
    /// values are in range by construction.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, OutOfBounds> {
        if row >= 3 || col >= 3 {
            return Err(OutOfBounds { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Parse from label or board index (0-8).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Every empty position on the board, in row-major order.
    ///
    /// The order is part of the engine contract: the search breaks score
    /// ties in favor of the first position scanned, so callers observe a
    /// deterministic choice among equally optimal moves. The list is
    /// regenerated fresh on each call.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(pos.row(), index / 3);
            assert_eq!(pos.col(), index % 3);
        }
    }

    #[test]
    fn test_enum_iteration_matches_all() {
        let iterated: Vec<Position> =
            <Position as strum::IntoEnumIterator>::iter().collect();
        assert_eq!(iterated, Position::ALL);
    }

    #[test]
    fn test_from_coords_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Ok(pos));
        }
    }

    #[test]
    fn test_from_coords_out_of_bounds() {
        assert_eq!(
            Position::from_coords(3, 0),
            Err(OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            Position::from_coords(0, 3),
            Err(OutOfBounds { row: 0, col: 3 })
        );
    }
}
