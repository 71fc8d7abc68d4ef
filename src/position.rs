//! Named board positions and console-entry translation.

use crate::board::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the board.
///
/// Positions map to board indices 0-8 in row-major order; the console
/// prompts with 1-indexed entry numbers, translated by [`Position::from_entry`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0).
    TopLeft,
    /// Top-center (index 1).
    TopCenter,
    /// Top-right (index 2).
    TopRight,
    /// Middle-left (index 3).
    MiddleLeft,
    /// Center (index 4).
    Center,
    /// Middle-right (index 5).
    MiddleRight,
    /// Bottom-left (index 6).
    BottomLeft,
    /// Bottom-center (index 7).
    BottomCenter,
    /// Bottom-right (index 8).
    BottomRight,
}

impl Position {
    /// All nine positions in board order.
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

    /// Display label for this position.
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

    /// Converts this position to a board index (0-8).
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

    /// The 1-indexed entry number the console shows for this position.
    pub fn entry(self) -> usize {
        self.to_index() + 1
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Translates a 1-indexed console entry to a position.
    ///
    /// Entries outside 1-9 do not name a cell.
    #[instrument]
    pub fn from_entry(entry: i64) -> Option<Self> {
        if (1..=9).contains(&entry) {
            Self::from_index((entry - 1) as usize)
        } else {
            None
        }
    }

    /// Positions whose cells are still empty.
    #[instrument(skip(board))]
    pub fn open_positions(board: &Board) -> Vec<Position> {
        Self::iter()
            .filter(|position| board.is_empty(position.to_index()))
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
    use crate::board::Mark;

    #[test]
    fn index_round_trip() {
        for position in Position::ALL {
            assert_eq!(Position::from_index(position.to_index()), Some(position));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn entry_translation() {
        assert_eq!(Position::from_entry(1), Some(Position::TopLeft));
        assert_eq!(Position::from_entry(5), Some(Position::Center));
        assert_eq!(Position::from_entry(9), Some(Position::BottomRight));
    }

    #[test]
    fn entry_rejects_out_of_range() {
        assert_eq!(Position::from_entry(0), None);
        assert_eq!(Position::from_entry(10), None);
        assert_eq!(Position::from_entry(-1), None);
    }

    #[test]
    fn entry_is_inverse_of_from_entry() {
        for position in Position::ALL {
            assert_eq!(Position::from_entry(position.entry() as i64), Some(position));
        }
    }

    #[test]
    fn open_positions_filters_taken_cells() {
        let mut board = Board::new();
        assert_eq!(Position::open_positions(&board).len(), 9);

        board.place(Position::Center.to_index(), Mark::X).expect("empty cell");
        let open = Position::open_positions(&board);
        assert_eq!(open.len(), 8);
        assert!(!open.contains(&Position::Center));
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(Position::Center.to_string(), "Center");
        assert_eq!(Position::BottomRight.label(), "Bottom-right");
    }
}
