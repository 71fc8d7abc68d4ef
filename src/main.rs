//! Console tic-tac-toe entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::cli::Cli;
use tictactoe_console::{ConsoleDisplay, ConsoleInput, Mark, Player, TurnCoordinator};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(player_x = %cli.player_x, player_o = %cli.player_o, "Starting console tic-tac-toe");

    let players = [
        Player::new(cli.player_x, Mark::X),
        Player::new(cli.player_o, Mark::O),
    ];

    let mut coordinator =
        TurnCoordinator::new(players, ConsoleInput::new(), ConsoleDisplay::new());
    let status = coordinator.run()?;
    info!(?status, "Exiting");

    Ok(())
}
