//! Game state and the move-application engine.

use crate::action::{Move, MoveError};
use crate::board::{Board, Cell, Mark};
use crate::player::Player;
use crate::position::Position;
use crate::rules::{self, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winning mark.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// True once the game has finished.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state: board, players, whose turn, status, history.
///
/// Owned by the engine and read-only outside this module; mutation goes
/// through [`Game::make_move`]. Frozen once the status leaves
/// [`GameStatus::InProgress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: usize,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    fn new(players: [Player; 2]) -> Self {
        Self {
            board: Board::new(),
            players,
            current: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index (0 or 1) of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player holding `mark`.
    pub fn player_with(&self, mark: Mark) -> &Player {
        if *self.players[0].mark() == mark {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// Status text for the display collaborator.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => {
                let player = self.current_player();
                format!("Player {} ({}) to move.", player.name(), player.mark())
            }
            GameStatus::Won(mark) => {
                let winner = self.player_with(mark);
                format!("Player {} ({}) wins!", winner.name(), mark)
            }
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Move-application engine.
///
/// Validates and applies moves, evaluates the rules verdict after each
/// placement, and sequences turns between the two players.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Starts a new game; `players[0]` moves first.
    #[instrument(skip(players))]
    pub fn new(players: [Player; 2]) -> Self {
        Self {
            state: GameState::new(players),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True once the game has finished.
    pub fn is_over(&self) -> bool {
        self.state.status.is_over()
    }

    /// Applies the current player's mark at `position`.
    ///
    /// Rejections leave the state untouched: a finished game fails with
    /// [`MoveError::GameOver`], an occupied target with
    /// [`MoveError::CellTaken`]. On an accepted move the rules verdict
    /// decides whether the game finishes or the turn passes to the other
    /// player; the turn index flips only when the game continues.
    #[instrument(skip(self), fields(player = %self.state.current_player().name()))]
    pub fn make_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.state.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let index = position.to_index();
        if !self.state.board.is_empty(index) {
            return Err(MoveError::CellTaken(position));
        }

        let mark = *self.state.current_player().mark();
        self.state.board.place(index, mark)?;
        self.state.history.push(Move::new(mark, position));
        debug!(%mark, %position, "Move applied");

        match rules::outcome(&self.state.board, mark) {
            Verdict::Win(winner) => self.state.status = GameStatus::Won(winner),
            Verdict::Draw => self.state.status = GameStatus::Draw,
            Verdict::Continue => self.state.current = 1 - self.state.current,
        }

        self.assert_invariants();
        Ok(self.state.status)
    }

    /// Debug-build checks for state corruption after a transition.
    fn assert_invariants(&self) {
        debug_assert!(self.marks_balanced(), "mark counts out of balance");
        debug_assert!(self.history_complete(), "history does not match board");
    }

    fn marks_balanced(&self) -> bool {
        self.count(Mark::X).abs_diff(self.count(Mark::O)) <= 1
    }

    fn history_complete(&self) -> bool {
        let taken = self
            .state
            .board
            .cells()
            .iter()
            .filter(|cell| !matches!(cell, Cell::Empty))
            .count();
        taken == self.state.history.len()
    }

    fn count(&self, mark: Mark) -> usize {
        self.state
            .board
            .cells()
            .iter()
            .filter(|cell| **cell == Cell::Taken(mark))
            .count()
    }
}
