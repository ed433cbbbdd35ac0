//! Line-oriented front end.
//!
//! Each input line is a command: a cell number (1-9) or position label to
//! play, `new` to start over, `quit` to leave.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictac_core::{CELL_COUNT, Game, GameView, MoveOutcome, Position, Square};
use tracing::{debug, info, instrument, trace, warn};

/// One parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play the given cell.
    Play(Position),
    /// Start a new game.
    NewGame,
    /// Leave the console.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything we could not make sense of.
    Unknown,
}

impl ConsoleCommand {
    /// Parses a line of input.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Nothing,
            "n" | "new" | "r" | "restart" => Self::NewGame,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Position::from_label_or_number(line)
                .map(Self::Play)
                .unwrap_or(Self::Unknown),
        }
    }
}

/// Writes board updates and messages as plain text.
#[derive(Debug)]
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Writes a line, logging rather than failing on I/O errors.
    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(error = %e, "Failed to write console output");
        }
    }
}

impl<W: Write> GameView for ConsoleView<W> {
    fn update_display(&mut self, board: &[Square; CELL_COUNT]) {
        let rows: Vec<String> = board
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * 3 + col + 1).to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        let text = rows.join("\n-+-+-\n");
        self.line(&format!("\n{}\n", text));
    }

    fn show_message(&mut self, text: &str) {
        self.line(&format!(">> {}", text));
    }

    fn clear_message(&mut self) {
        // Printed lines stay on screen; nothing to erase.
        trace!("Console status cleared");
    }
}

/// Runs the console loop until input ends or the player quits.
#[instrument(skip_all)]
pub fn run_console<W: Write, R: BufRead>(game: &mut Game<ConsoleView<W>>, input: R) -> Result<()> {
    info!("Starting console game");
    prompt_turn(game);

    for line in input.lines() {
        let line = line.context("Failed to read console input")?;
        match ConsoleCommand::parse(&line) {
            ConsoleCommand::Play(pos) => match game.play(pos.to_index()) {
                Ok(MoveOutcome::Continue) => prompt_turn(game),
                Ok(MoveOutcome::Won(_) | MoveOutcome::Draw) => {
                    game.view_mut().line("Type 'new' to play again or 'quit' to leave.");
                }
                Err(e) => debug!(error = %e, "Move ignored"),
            },
            ConsoleCommand::NewGame => {
                game.new_game();
                game.view_mut().line(">> New game");
                prompt_turn(game);
            }
            ConsoleCommand::Quit => {
                info!("Player quit");
                break;
            }
            ConsoleCommand::Nothing => {}
            ConsoleCommand::Unknown => {
                game.view_mut()
                    .line("Enter 1-9 or a position name, 'new' or 'quit'.");
            }
        }
    }

    game.view_mut().out.flush().context("Failed to flush console output")?;
    Ok(())
}

fn prompt_turn<W: Write>(game: &mut Game<ConsoleView<W>>) {
    let player = game.current_player();
    let text = format!("{}'s turn ({})", player.name(), player.mark());
    game.view_mut().line(&text);
}
