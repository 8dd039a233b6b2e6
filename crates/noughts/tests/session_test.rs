//! Tests for the session layer: mode selection and the turn protocol.

use noughts::{
    GameStatus, Mode, MoveError, Player, Position, Session, SessionError, Square,
};

fn occupied_count(session: &Session) -> usize {
    session
        .game()
        .state()
        .board()
        .squares()
        .iter()
        .filter(|s| **s != Square::Empty)
        .count()
}

#[test]
fn test_click_rejected_before_mode_selection() {
    let mut session = Session::with_seed(1);

    let result = session.click_cell(Position::Center);

    assert_eq!(result, Err(SessionError::NoModeSelected));
    assert_eq!(occupied_count(&session), 0);
}

#[test]
fn test_mode_selected_once_per_game() {
    let mut session = Session::with_seed(1);

    session.select_mode(Mode::TwoPlayer).unwrap();
    let result = session.select_mode(Mode::VsComputer);

    assert_eq!(result, Err(SessionError::ModeAlreadySelected));
    assert_eq!(session.mode(), Some(Mode::TwoPlayer));
}

#[test]
fn test_two_player_mode_alternates_without_pending() {
    let mut session = Session::with_seed(1);
    session.select_mode(Mode::TwoPlayer).unwrap();

    session.click_cell(Position::TopLeft).unwrap();
    assert!(!session.computer_move_pending());
    assert_eq!(session.game().state().current_player(), Player::O);

    session.click_cell(Position::Center).unwrap();
    assert!(!session.computer_move_pending());
    assert_eq!(session.game().state().current_player(), Player::X);
}

#[test]
fn test_vs_computer_round_trip() {
    let mut session = Session::with_seed(7);
    session.select_mode(Mode::VsComputer).unwrap();

    session.click_cell(Position::TopLeft).unwrap();
    assert!(session.computer_move_pending());

    let reply = session.play_computer_move().unwrap();

    assert_ne!(reply, Position::TopLeft);
    assert!(!session.computer_move_pending());
    assert_eq!(occupied_count(&session), 2);
    // The human is X again after the computer's O reply.
    assert_eq!(session.game().state().current_player(), Player::X);
    assert_eq!(session.game().state().status(), GameStatus::InProgress);
}

#[test]
fn test_clicks_locked_while_computer_is_thinking() {
    let mut session = Session::with_seed(7);
    session.select_mode(Mode::VsComputer).unwrap();
    session.click_cell(Position::TopLeft).unwrap();

    let result = session.click_cell(Position::Center);

    assert_eq!(result, Err(SessionError::ComputerThinking));
    assert_eq!(occupied_count(&session), 1);
}

#[test]
fn test_play_computer_move_requires_pending() {
    let mut session = Session::with_seed(7);
    session.select_mode(Mode::VsComputer).unwrap();

    assert_eq!(
        session.play_computer_move(),
        Err(SessionError::NoMovePending)
    );
}

#[test]
fn test_computer_never_moves_after_game_ends() {
    // Play whole games to the end across several seeds; however each one
    // finishes (X win, O win, or draw), no computer reply may be pending
    // afterwards.
    for seed in 0..10 {
        let mut session = Session::with_seed(seed);
        session.select_mode(Mode::VsComputer).unwrap();

        while session.game().state().status() == GameStatus::InProgress {
            let pos = Position::ALL
                .into_iter()
                .find(|p| session.game().state().board().is_empty(*p))
                .unwrap();
            session.click_cell(pos).unwrap();
            if session.computer_move_pending() {
                session.play_computer_move().unwrap();
            }
        }

        assert!(!session.computer_move_pending(), "seed {seed}");
        assert_eq!(
            session.play_computer_move(),
            Err(SessionError::NoMovePending),
            "seed {seed}"
        );
    }
}

#[test]
fn test_terminal_lockout() {
    let mut session = Session::with_seed(1);
    session.select_mode(Mode::TwoPlayer).unwrap();

    // X takes the top row.
    session.click_cell(Position::TopLeft).unwrap();
    session.click_cell(Position::MiddleLeft).unwrap();
    session.click_cell(Position::TopCenter).unwrap();
    session.click_cell(Position::Center).unwrap();
    session.click_cell(Position::TopRight).unwrap();
    assert_eq!(session.game().state().status(), GameStatus::Won(Player::X));

    let before = session.game().clone();
    let result = session.click_cell(Position::BottomRight);

    assert_eq!(result, Err(SessionError::Move(MoveError::GameOver)));
    assert_eq!(session.game(), &before);
}

#[test]
fn test_reset_returns_to_initial_state() {
    let mut session = Session::with_seed(5);
    session.select_mode(Mode::TwoPlayer).unwrap();
    session.click_cell(Position::Center).unwrap();
    session.click_cell(Position::TopLeft).unwrap();

    session.reset();

    assert_eq!(session.mode(), None);
    assert_eq!(occupied_count(&session), 0);
    assert_eq!(session.game().state().current_player(), Player::X);
    assert_eq!(session.game().state().status(), GameStatus::InProgress);
    assert!(!session.computer_move_pending());

    // Idempotent: resetting again changes nothing.
    session.reset();
    assert_eq!(session.mode(), None);
    assert_eq!(occupied_count(&session), 0);
}

#[test]
fn test_reset_cancels_pending_computer_move() {
    let mut session = Session::with_seed(5);
    session.select_mode(Mode::VsComputer).unwrap();
    session.click_cell(Position::Center).unwrap();
    assert!(session.computer_move_pending());

    session.reset();

    assert!(!session.computer_move_pending());
    assert_eq!(
        session.play_computer_move(),
        Err(SessionError::NoMovePending)
    );
    assert_eq!(occupied_count(&session), 0);
}

#[test]
fn test_status_line_follows_state() {
    let mut session = Session::with_seed(2);
    assert_eq!(session.status_line(), "Choose a game mode to start.");

    session.select_mode(Mode::VsComputer).unwrap();
    assert_eq!(session.status_line(), "Player X's turn");

    session.click_cell(Position::Center).unwrap();
    assert_eq!(session.status_line(), "Computer is thinking...");

    session.play_computer_move().unwrap();
    assert_eq!(session.status_line(), "Player X's turn");
}

#[test]
fn test_identical_seeds_give_identical_games() {
    let mut a = Session::with_seed(11);
    let mut b = Session::with_seed(11);
    for session in [&mut a, &mut b] {
        session.select_mode(Mode::VsComputer).unwrap();
    }

    for pos in [Position::TopLeft, Position::BottomRight, Position::TopCenter] {
        let ra = a.click_cell(pos);
        let rb = b.click_cell(pos);
        assert_eq!(ra, rb);
        if ra.is_err() {
            continue;
        }
        if a.computer_move_pending() {
            assert_eq!(
                a.play_computer_move().unwrap(),
                b.play_computer_move().unwrap()
            );
        }
    }

    assert_eq!(a.game(), b.game());
}
