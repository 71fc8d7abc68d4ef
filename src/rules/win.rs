//! Win detection.

use crate::board::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning triples: three rows, three columns, two diagonals.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff `mark` holds all three cells of some winning triple.
#[instrument(skip(board))]
pub fn has_win(board: &Board, mark: Mark) -> bool {
    TRIPLES.iter().any(|triple| {
        triple
            .iter()
            .all(|&index| board.cells()[index] == Cell::Taken(mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_win_on_empty_board() {
        let board = Board::new();
        assert!(!has_win(&board, Mark::X));
        assert!(!has_win(&board, Mark::O));
    }

    #[test]
    fn detects_every_triple() {
        let triples = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for triple in triples {
            let mut board = Board::new();
            for index in triple {
                board.place(index, Mark::O).expect("empty cell");
            }
            assert!(has_win(&board, Mark::O), "triple {triple:?} not detected");
            assert!(!has_win(&board, Mark::X));
        }
    }

    #[test]
    fn no_win_on_incomplete_triple() {
        let mut board = Board::new();
        board.place(0, Mark::X).expect("empty cell");
        board.place(1, Mark::X).expect("empty cell");
        assert!(!has_win(&board, Mark::X));
    }

    #[test]
    fn mixed_triple_is_not_a_win() {
        let mut board = Board::new();
        board.place(0, Mark::X).expect("empty cell");
        board.place(1, Mark::O).expect("empty cell");
        board.place(2, Mark::X).expect("empty cell");
        assert!(!has_win(&board, Mark::X));
        assert!(!has_win(&board, Mark::O));
    }
}
