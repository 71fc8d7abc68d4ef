//! Command-line interface.

use clap::Parser;

/// Console tic-tac-toe for two players at one keyboard.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_console")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the player using X (moves first)
    #[arg(long, default_value = "Player 1")]
    pub player_x: String,

    /// Name of the player using O
    #[arg(long, default_value = "Player 2")]
    pub player_o: String,
}
