//! tictac - two-player tic-tac-toe in the terminal
//!
//! The game rules live in [`tictac_core`]; this crate adds the front ends
//! and the ambient plumbing around them.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags and subcommands
//! - **Config**: optional TOML settings merged with CLI overrides
//! - **Tui**: ratatui front end with cursor and number-key input
//! - **Console**: line-oriented front end over any reader and writer
//! - **Logging**: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use tictac::{ConsoleView, Game, run_console};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut game = Game::new(ConsoleView::new(Vec::new()));
//! run_console(&mut game, "1\n4\n2\n5\n3\n".as_bytes())?;
//! assert!(game.board().has_winner());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod logging;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Front ends
pub use console::{ConsoleCommand, ConsoleView, run_console};
pub use tui::{App, TuiView, draw, move_cursor, run_tui};

// Crate-level exports - Logging
pub use logging::{init_file_tracing, init_stderr_tracing};

// Crate-level exports - Game types
pub use tictac_core::{
    Board, Game, GameStatus, GameView, Mark, MoveError, MoveOutcome, Player, Position,
    RecordingView, Square,
};
