//! Game rules: pure functions over a board snapshot.
//!
//! Rules are separated from board storage so the engine and tests can
//! evaluate positions without touching game state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::has_win;

use crate::board::{Board, Mark};
use tracing::instrument;

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Game continues with the other player.
    Continue,
    /// The mark that just moved completed a triple.
    Win(Mark),
    /// Board is full with no winner.
    Draw,
}

/// Evaluates the board after `just_moved` placed a mark.
///
/// Win is checked before draw: a move that fills the last empty cell and
/// completes a triple is a win, not a draw.
#[instrument(skip(board))]
pub fn outcome(board: &Board, just_moved: Mark) -> Verdict {
    if has_win(board, just_moved) {
        Verdict::Win(just_moved)
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(layout: [char; 9]) -> Board {
        let mut board = Board::new();
        for (index, cell) in layout.into_iter().enumerate() {
            match cell {
                'X' => board.place(index, Mark::X).expect("empty cell"),
                'O' => board.place(index, Mark::O).expect("empty cell"),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn empty_board_continues() {
        let board = Board::new();
        assert_eq!(outcome(&board, Mark::X), Verdict::Continue);
    }

    #[test]
    fn completed_triple_wins() {
        let board = filled(['X', 'X', 'X', 'O', 'O', ' ', ' ', ' ', ' ']);
        assert_eq!(outcome(&board, Mark::X), Verdict::Win(Mark::X));
    }

    #[test]
    fn full_board_without_winner_draws() {
        let board = filled(['X', 'O', 'X', 'O', 'X', 'O', 'O', 'X', 'O']);
        assert_eq!(outcome(&board, Mark::X), Verdict::Draw);
        assert_eq!(outcome(&board, Mark::O), Verdict::Draw);
    }

    #[test]
    fn win_takes_priority_over_draw() {
        // Full board where the top row belongs to X.
        let board = filled(['X', 'X', 'X', 'O', 'O', 'X', 'O', 'X', 'O']);
        assert!(is_full(&board));
        assert_eq!(outcome(&board, Mark::X), Verdict::Win(Mark::X));
    }
}
