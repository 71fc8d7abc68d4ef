//! Turn sequencing between two players over the I/O collaborators.

use crate::action::MoveError;
use crate::game::{Game, GameStatus};
use crate::interface::{GameDisplay, MoveInput};
use crate::player::Player;
use crate::position::Position;
use anyhow::Result;
use tracing::{debug, info, instrument, warn};

/// Warning shown for entries that do not name a cell.
const INVALID_ENTRY: &str = "Invalid input. Please enter a number between 1 and 9.";
/// Warning shown when the chosen cell is already taken.
const CELL_TAKEN: &str = "That position is already taken. Try again.";

/// Sequences turns until the game finishes.
///
/// Owns an explicit [`Game`] instance plus the two collaborators: each
/// turn it prompts the current player, validates and applies the entry,
/// and renders the board with a status message. Rejected entries re-prompt
/// the same player.
pub struct TurnCoordinator<I, D> {
    game: Game,
    input: I,
    display: D,
}

impl<I: MoveInput, D: GameDisplay> TurnCoordinator<I, D> {
    /// Creates a coordinator for a fresh game; `players[0]` moves first.
    pub fn new(players: [Player; 2], input: I, display: D) -> Self {
        Self {
            game: Game::new(players),
            input,
            display,
        }
    }

    /// Returns the game under coordination.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the input collaborator.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Returns the display collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Plays the game to completion and returns the terminal status.
    ///
    /// Fails only when the input collaborator fails (e.g. closed stdin);
    /// rejected moves re-prompt and never surface as errors. Once the
    /// status is terminal no further move requests are issued.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");
        self.display.show_message("Welcome to Console Tic Tac Toe!");
        self.display.show_board(self.game.state().board());

        while !self.game.is_over() {
            self.take_turn()?;
        }

        let status = self.game.state().status();
        info!(?status, "Game finished");
        Ok(status)
    }

    /// Prompts the current player until one entry is accepted and applied.
    ///
    /// Iterative on purpose: every rejection warns and re-prompts the same
    /// player, and game state only changes on the accepted entry.
    #[instrument(skip(self), fields(player = %self.game.state().current_player().name()))]
    fn take_turn(&mut self) -> Result<()> {
        loop {
            let Some(entry) = self
                .input
                .request_move(self.game.state().current_player())?
            else {
                warn!("Non-numeric entry rejected");
                self.display.show_message(INVALID_ENTRY);
                continue;
            };

            let attempt = Position::from_entry(entry)
                .ok_or(MoveError::OutOfRange(entry))
                .and_then(|position| self.game.make_move(position));

            match attempt {
                Ok(status) => {
                    self.display.show_board(self.game.state().board());
                    self.display.show_message(&self.game.state().status_line());
                    debug!(?status, "Turn complete");
                    return Ok(());
                }
                Err(MoveError::OutOfRange(entry)) => {
                    warn!(entry, "Out-of-range entry rejected");
                    self.display.show_message(INVALID_ENTRY);
                }
                Err(MoveError::CellTaken(position)) => {
                    warn!(%position, "Occupied cell rejected");
                    self.display.show_message(CELL_TAKEN);
                }
                Err(error) => {
                    // Game-over and board-level errors cannot arise from
                    // this loop; the run loop stops on a terminal status
                    // and positions are validated before placing.
                    warn!(%error, "Unexpected move rejection");
                    self.display.show_message(&error.to_string());
                }
            }
        }
    }
}
