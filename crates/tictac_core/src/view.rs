//! Display collaborator for a running game.

use crate::{CELL_COUNT, Square};
use tracing::trace;

/// Receives notifications from a [`Game`](crate::Game).
///
/// The game owns no rendering logic; it only tells the view what changed.
pub trait GameView {
    /// Shows the current contents of all nine cells.
    fn update_display(&mut self, board: &[Square; CELL_COUNT]);

    /// Shows a status message (win or draw).
    fn show_message(&mut self, text: &str);

    /// Removes any shown status message.
    fn clear_message(&mut self);
}

/// A view that remembers what it was told.
///
/// Useful for headless play and for asserting on notifications in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    board: [Square; CELL_COUNT],
    message: Option<String>,
    updates: usize,
}

impl RecordingView {
    /// Last board snapshot received.
    pub fn board(&self) -> &[Square; CELL_COUNT] {
        &self.board
    }

    /// Message currently shown, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Number of `update_display` calls received.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl GameView for RecordingView {
    fn update_display(&mut self, board: &[Square; CELL_COUNT]) {
        trace!(?board, "Recording board update");
        self.board = *board;
        self.updates += 1;
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn clear_message(&mut self) {
        self.message = None;
    }
}
