//! Collaborator interfaces between the game core and the console.
//!
//! The coordinator talks to the outside world only through these traits,
//! so tests can script input and record output without a terminal.

mod console;

pub use console::{ConsoleDisplay, ConsoleInput};

use crate::board::Board;
use crate::player::Player;
use anyhow::Result;

/// Supplies moves for the prompting side of the turn loop.
pub trait MoveInput {
    /// Requests a move from `player`.
    ///
    /// Returns the raw 1-indexed cell entry, or `None` when the entry was
    /// not numeric; the coordinator validates range and occupancy and
    /// re-requests on rejection. `Err` is reserved for real input
    /// failures such as a closed stdin.
    fn request_move(&mut self, player: &Player) -> Result<Option<i64>>;
}

/// Receives board renders and status text. Fire-and-forget.
pub trait GameDisplay {
    /// Shows the current board.
    fn show_board(&mut self, board: &Board);

    /// Shows a status or warning message.
    fn show_message(&mut self, text: &str);
}
