//! tictac - two-player tic-tac-toe
//!
//! Reads settings, sets up logging and starts the chosen front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictac::{
    Cli, Command, ConsoleView, Game, Mark, Player, Settings, init_file_tracing,
    init_stderr_tracing, run_console, run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let overrides = Settings::new(cli.player_x, cli.player_o, cli.log_file);
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .merge(overrides);

    match command {
        Command::Tui => {
            let log_file = settings.log_file_or_default();
            init_file_tracing(&log_file)
                .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
            let (player_x, player_o) = players(&settings);
            run_tui(player_x, player_o)
        }
        Command::Console => {
            init_stderr_tracing();
            run_console_mode(&settings)
        }
    }
}

/// Builds both players from the configured names.
#[instrument(skip(settings))]
fn players(settings: &Settings) -> (Player, Player) {
    (
        Player::new(Mark::X, settings.player_x().clone()),
        Player::new(Mark::O, settings.player_o().clone()),
    )
}

/// Run the line-oriented game on stdin/stdout
#[instrument(skip(settings))]
fn run_console_mode(settings: &Settings) -> Result<()> {
    info!("Starting console mode");
    let (player_x, player_o) = players(settings);
    let mut game = Game::with_players(player_x, player_o, ConsoleView::new(io::stdout()));
    run_console(&mut game, io::stdin().lock())
}
