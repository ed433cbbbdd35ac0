//! Pure tic-tac-toe game logic.
//!
//! The crate is split the way the game reads:
//!
//! - [`Board`] owns the nine cells and answers questions about them
//! - [`rules`] holds the winning lines and full-board detection
//! - [`Player`] pairs a [`Mark`] with a display name
//! - [`Game`] sequences turns and notifies a [`GameView`]
//!
//! # Example
//!
//! ```
//! use tictac_core::{Game, MoveOutcome, RecordingView};
//!
//! let mut game = Game::new(RecordingView::default());
//! for cell in [0, 1, 3, 4] {
//!     assert_eq!(game.play(cell), Ok(MoveOutcome::Continue));
//! }
//! assert!(matches!(game.play(6), Ok(MoveOutcome::Won(_))));
//! assert_eq!(game.view().message(), Some("Player X won the game!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod player;
mod position;
pub mod rules;
mod view;

pub use board::Board;
pub use error::MoveError;
pub use game::{Game, GameStatus, MoveOutcome};
pub use player::{Mark, Player, Square};
pub use position::Position;
pub use view::{GameView, RecordingView};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;
