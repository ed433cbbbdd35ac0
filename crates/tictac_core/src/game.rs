//! Turn sequencing for tic-tac-toe.
//!
//! [`Game`] owns the board and both players, and reports every accepted
//! move to its [`GameView`]. The status is derived from the board and the
//! round counter, never stored.

use crate::error::MoveError;
use crate::player::{Mark, Player};
use crate::view::GameView;
use crate::{Board, CELL_COUNT, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// First round of a fresh game.
const FIRST_ROUND: u8 = 1;

/// Round reached once all nine moves have been played.
const EXHAUSTED_ROUND: u8 = CELL_COUNT as u8 + 1;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The next player is up.
    Continue,
    /// The move completed a line.
    Won(Mark),
    /// The move filled the board without a line.
    Draw,
}

/// A two-player game session bound to a view.
#[derive(Debug)]
pub struct Game<V> {
    board: Board,
    player_x: Player,
    player_o: Player,
    current: Mark,
    round: u8,
    view: V,
}

impl<V: GameView> Game<V> {
    /// Creates a game with default player names.
    pub fn new(view: V) -> Self {
        Self::with_players(
            Player::new(Mark::X, None),
            Player::new(Mark::O, None),
            view,
        )
    }

    /// Creates a game with the given players.
    ///
    /// The view is sent the empty board straight away.
    #[instrument(skip(view), fields(x = %player_x.name(), o = %player_o.name()))]
    pub fn with_players(player_x: Player, player_o: Player, mut view: V) -> Self {
        let board = Board::new();
        view.update_display(&board.state());
        Self {
            board,
            player_x,
            player_o,
            current: Mark::X,
            round: FIRST_ROUND,
            view,
        }
    }

    /// Plays the current player's mark in `cell`.
    ///
    /// Rejected moves change nothing: the turn and round stay where they
    /// were and the view is not notified.
    #[instrument(skip(self), fields(player = %self.current, round = self.round))]
    pub fn play(&mut self, cell: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            debug!("Move after game end ignored");
            return Err(MoveError::GameOver);
        }

        self.board.try_mark(cell, self.current)?;
        self.view.update_display(&self.board.state());

        if self.board.has_winner() {
            let winner = self.current_player();
            info!(winner = %winner.name(), "Game won");
            let message = format!("{} won the game!", winner.name());
            self.view.show_message(&message);
            return Ok(MoveOutcome::Won(self.current));
        }

        let outcome = if self.round == CELL_COUNT as u8 {
            info!("Game drawn");
            self.view.show_message("It's a draw!");
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        };

        self.round += 1;
        self.current = self.current.opponent();
        Ok(outcome)
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.board.reset();
        self.view.update_display(&self.board.state());
        self.view.clear_message();
        self.round = FIRST_ROUND;
        self.current = Mark::X;
    }

    /// Returns the status derived from the board and round counter.
    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if self.round >= EXHAUSTED_ROUND => {
                debug_assert!(rules::is_draw(&self.board));
                GameStatus::Draw
            }
            None => GameStatus::InProgress,
        }
    }

    /// Checks whether further moves are refused.
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }
}

impl<V> Game<V> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is (the winner, once won).
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Returns the player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Returns the round counter: 1-9 while playing, 10 once exhausted.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingView, Square};

    fn game() -> Game<RecordingView> {
        Game::new(RecordingView::default())
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let game = game();
        assert_eq!(game.current_player().mark(), Mark::X);
        assert_eq!(game.round(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.view().updates(), 1);
    }

    #[test]
    fn test_occupied_cell_does_not_advance_turn() {
        let mut game = game();
        game.play(4).unwrap();
        let updates = game.view().updates();

        assert_eq!(game.play(4), Err(MoveError::AlreadyOccupied(4)));
        assert_eq!(game.current_player().mark(), Mark::O);
        assert_eq!(game.round(), 2);
        assert_eq!(game.view().updates(), updates);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut game = game();
        assert_eq!(game.play(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game.round(), 1);
        assert_eq!(game.current_player().mark(), Mark::X);
    }

    #[test]
    fn test_win_keeps_winner_current() {
        let mut game = game();
        for cell in [0, 1, 3, 4] {
            assert_eq!(game.play(cell), Ok(MoveOutcome::Continue));
        }
        assert_eq!(game.play(6), Ok(MoveOutcome::Won(Mark::X)));
        assert_eq!(game.current_player().mark(), Mark::X);
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert_eq!(game.play(8), Err(MoveError::GameOver));
        assert_eq!(game.board().get(8), Some(Square::Empty));
    }

    #[test]
    fn test_draw_exhausts_rounds() {
        let mut game = game();
        let moves = [0, 2, 1, 3, 5, 4, 6, 7, 8];
        for cell in &moves[..8] {
            assert_eq!(game.play(*cell), Ok(MoveOutcome::Continue));
        }
        assert_eq!(game.play(8), Ok(MoveOutcome::Draw));
        assert_eq!(game.round(), 10);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.view().message(), Some("It's a draw!"));
    }

    #[test]
    fn test_new_game_resets_session() {
        let mut game = game();
        for cell in [0, 1, 3, 4, 6] {
            game.play(cell).unwrap();
        }
        game.new_game();

        assert!(game.board().state().iter().all(|s| *s == Square::Empty));
        assert!(!game.board().has_winner());
        assert_eq!(game.round(), 1);
        assert_eq!(game.current_player().mark(), Mark::X);
        assert_eq!(game.view().message(), None);
    }
}
