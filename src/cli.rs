//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tictac - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Display name for the X player
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for the O player
    #[arg(long)]
    pub player_o: Option<String>,

    /// Log file used by the terminal UI
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Front end to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Full-screen terminal UI
    #[default]
    Tui,

    /// Line-oriented play on stdin/stdout
    Console,
}
