//! Move records and rejection errors.
//!
//! Moves are domain events: the record of a mark placed at a position,
//! kept in game history and reported in logs.

use crate::board::{BoardError, Mark};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A single move: `mark` placed at `position`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The target position.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// Entry does not name a cell.
    #[display("Entry {} is not a cell number (1-9)", _0)]
    OutOfRange(i64),

    /// Target cell already holds a mark.
    #[display("{} is already taken", _0)]
    CellTaken(Position),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// Board-level precondition violation (caller bug).
    #[display("{}", _0)]
    #[from]
    Board(BoardError),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_displays_mark_and_label() {
        let action = Move::new(Mark::X, Position::Center);
        assert_eq!(action.to_string(), "X -> Center");
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            MoveError::OutOfRange(12).to_string(),
            "Entry 12 is not a cell number (1-9)"
        );
        assert_eq!(
            MoveError::CellTaken(Position::TopLeft).to_string(),
            "Top-left is already taken"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn board_errors_convert() {
        let error: MoveError = BoardError::OutOfRange(9).into();
        assert_eq!(error, MoveError::Board(BoardError::OutOfRange(9)));
    }
}
