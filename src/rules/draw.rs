//! Draw detection.

use super::win::has_win;
use crate::board::{Board, Cell, Mark};
use tracing::instrument;

/// True iff every cell holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// True iff the board is full and neither mark has won.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_win(board, Mark::X) && !has_win(board, Mark::O)
}
