//! Console implementations of the collaborator interfaces.

use super::{GameDisplay, MoveInput};
use crate::board::Board;
use crate::player::Player;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::instrument;

/// Reads moves from stdin, one line per prompt.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    /// Creates a stdin-backed input.
    pub fn new() -> Self {
        Self
    }
}

impl MoveInput for ConsoleInput {
    #[instrument(skip_all, fields(player = %player.name()))]
    fn request_move(&mut self, player: &Player) -> Result<Option<i64>> {
        let mut stdout = std::io::stdout();
        write!(
            stdout,
            "Player {} ({}), enter your move (1-9): ",
            player.name(),
            player.mark()
        )
        .context("Failed to write move prompt")?;
        stdout.flush().context("Failed to flush move prompt")?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read move")?;
        if read == 0 {
            bail!("Input stream closed");
        }

        Ok(line.trim().parse::<i64>().ok())
    }
}

/// Prints boards and messages to stdout.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    /// Creates a stdout-backed display.
    pub fn new() -> Self {
        Self
    }
}

impl GameDisplay for ConsoleDisplay {
    fn show_board(&mut self, board: &Board) {
        println!("\n{}\n", board.render());
    }

    fn show_message(&mut self, text: &str) {
        println!("{text}");
    }
}
