//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use tictac_core::{CELL_COUNT, Game, GameView, Player, Position, Square};
use tracing::{debug, instrument};

/// What the terminal shows: the last board snapshot and status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiView {
    board: [Square; CELL_COUNT],
    message: Option<String>,
}

impl TuiView {
    /// Board as last reported by the game.
    pub fn board(&self) -> &[Square; CELL_COUNT] {
        &self.board
    }

    /// Message currently shown, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl GameView for TuiView {
    fn update_display(&mut self, board: &[Square; CELL_COUNT]) {
        self.board = *board;
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn clear_message(&mut self) {
        self.message = None;
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game<TuiView>,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application for the two players.
    pub fn new(player_x: Player, player_o: Player) -> Self {
        Self {
            game: Game::with_players(player_x, player_o, TuiView::default()),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game<TuiView> {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        match self.game.view().message() {
            Some(message) => format!("{} Press 'n' for a new game.", message),
            None => {
                let player = self.game.current_player();
                format!("{}'s turn ({})", player.name(), player.mark())
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Char('r') => {
                self.game.new_game();
                self.cursor = Position::Center;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_label_or_number(&d.to_string()))
                {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn play(&mut self, pos: Position) {
        if let Err(e) = self.game.play(pos.to_index()) {
            debug!(error = %e, position = %pos, "Move ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::Mark;

    fn app() -> App {
        App::new(Player::new(Mark::X, None), Player::new(Mark::O, None))
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.game().view().board()[1], Square::Occupied(Mark::X));
        assert_eq!(app.status_message(), "Player O's turn (O)");
    }

    #[test]
    fn test_digit_plays_and_moves_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Char('9'));

        assert_eq!(app.cursor(), Position::BottomRight);
        assert_eq!(app.game().board().get(8), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_zero_is_ignored() {
        let mut app = app();
        app.handle_key(KeyCode::Char('0'));
        assert_eq!(app.game().round(), 1);
    }

    #[test]
    fn test_win_then_new_game() {
        let mut app = app();
        for key in ['1', '2', '4', '5', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(
            app.status_message(),
            "Player X won the game! Press 'n' for a new game."
        );

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.game().round(), 1);
        assert_eq!(app.game().view().message(), None);
        assert!(app.game().view().board().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
