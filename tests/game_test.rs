//! Tests for turn sequencing, win and draw handling.

use tictac::{Game, GameStatus, Mark, MoveError, MoveOutcome, Player, RecordingView, Square};

fn fresh() -> Game<RecordingView> {
    Game::new(RecordingView::default())
}

fn play_all(game: &mut Game<RecordingView>, cells: &[usize]) {
    for &cell in cells {
        game.play(cell).expect("Valid move");
    }
}

#[test]
fn test_column_win_scenario() {
    let mut game = fresh();
    // X: 0, 3, 6 / O: 1, 4
    play_all(&mut game, &[0, 1, 3, 4]);
    assert_eq!(game.play(6), Ok(MoveOutcome::Won(Mark::X)));

    assert!(game.board().has_winner());
    assert_eq!(game.view().message(), Some("Player X won the game!"));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = fresh();
    // X: 0, 4, 8 / O: 1, 2
    play_all(&mut game, &[0, 1, 4, 2]);
    assert_eq!(game.play(8), Ok(MoveOutcome::Won(Mark::X)));
    assert_eq!(game.view().message(), Some("Player X won the game!"));

    game.new_game();
    // X: 0, 1, 8 / O: 2, 4, 6
    play_all(&mut game, &[0, 2, 1, 4, 8]);
    assert_eq!(game.play(6), Ok(MoveOutcome::Won(Mark::O)));
    assert_eq!(game.view().message(), Some("Player O won the game!"));
}

#[test]
fn test_draw_scenario() {
    let mut game = fresh();
    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7
    play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7]);
    assert_eq!(game.view().message(), None);
    assert_eq!(game.play(8), Ok(MoveOutcome::Draw));

    assert!(!game.board().has_winner());
    assert_eq!(game.view().message(), Some("It's a draw!"));
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_moves_after_win_do_not_change_board() {
    let mut game = fresh();
    play_all(&mut game, &[0, 1, 3, 4, 6]);
    let before = game.board().state();
    let updates = game.view().updates();

    for cell in [2, 5, 7, 8] {
        assert_eq!(game.play(cell), Err(MoveError::GameOver));
    }
    assert_eq!(game.board().state(), before);
    assert_eq!(game.view().updates(), updates);
}

#[test]
fn test_turn_alternation() {
    let mut game = fresh();
    // Eight moves without completing a line.
    let moves = [0, 2, 1, 3, 5, 4, 6, 7];
    for (n, &cell) in moves.iter().enumerate() {
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.current_player().mark(), expected, "before move {}", n);
        game.play(cell).unwrap();
    }
    assert_eq!(game.current_player().mark(), Mark::X);
}

#[test]
fn test_rejected_move_is_idempotent() {
    let mut game = fresh();
    game.play(4).unwrap();
    let snapshot = game.board().state();

    for _ in 0..3 {
        assert_eq!(game.play(4), Err(MoveError::AlreadyOccupied(4)));
        assert_eq!(game.board().state(), snapshot);
        assert_eq!(game.current_player().mark(), Mark::O);
    }

    // Retrying with a free cell works as normal.
    assert_eq!(game.play(0), Ok(MoveOutcome::Continue));
    assert_eq!(game.board().get(0), Some(Square::Occupied(Mark::O)));
}

#[test]
fn test_new_game_after_draw() {
    let mut game = fresh();
    play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    game.new_game();

    assert!(game.board().state().iter().all(|s| *s == Square::Empty));
    assert!(!game.board().has_winner());
    assert_eq!(game.view().board(), &[Square::Empty; 9]);
    assert_eq!(game.view().message(), None);
    assert_eq!(game.current_player().mark(), Mark::X);
    assert_eq!(game.play(4), Ok(MoveOutcome::Continue));
}

#[test]
fn test_custom_names_in_messages() {
    let mut game = Game::with_players(
        Player::new(Mark::X, Some("Alice".to_string())),
        Player::new(Mark::O, Some("Bob".to_string())),
        RecordingView::default(),
    );
    // O takes the middle row.
    play_all(&mut game, &[0, 3, 1, 4, 8]);
    assert_eq!(game.play(5), Ok(MoveOutcome::Won(Mark::O)));
    assert_eq!(game.view().message(), Some("Bob won the game!"));
}

#[test]
fn test_view_sees_every_accepted_move() {
    let mut game = fresh();
    play_all(&mut game, &[4, 0]);
    let _ = game.play(4);

    // Initial snapshot plus two accepted moves.
    assert_eq!(game.view().updates(), 3);
    assert_eq!(game.view().board()[4], Square::Occupied(Mark::X));
    assert_eq!(game.view().board()[0], Square::Occupied(Mark::O));
}
