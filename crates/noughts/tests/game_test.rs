//! Tests for the core game state machine.

use noughts::{Game, GameStatus, MoveError, Player, Position, Square};

#[test]
fn test_new_game_initial_state() {
    let game = Game::new();
    let state = game.state();

    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!(state.history().is_empty());
    assert!(
        state
            .board()
            .squares()
            .iter()
            .all(|s| *s == Square::Empty)
    );
}

#[test]
fn test_alternating_players() {
    let mut game = Game::new();
    assert_eq!(game.state().current_player(), Player::X);

    game.make_move(Position::Center).unwrap();
    assert_eq!(game.state().current_player(), Player::O);

    game.make_move(Position::TopLeft).unwrap();
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();

    let before = game.state().clone();
    let result = game.make_move(Position::Center);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    // Rejected move leaves the state untouched, including whose turn it is.
    assert_eq!(game.state(), &before);
}

#[test]
fn test_win_top_row() {
    let mut game = Game::new();

    game.make_move(Position::TopLeft).unwrap(); // X
    game.make_move(Position::Center).unwrap(); // O
    game.make_move(Position::TopCenter).unwrap(); // X
    game.make_move(Position::BottomLeft).unwrap(); // O
    game.make_move(Position::TopRight).unwrap(); // X wins

    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
    assert!(game.is_over());
}

#[test]
fn test_moves_rejected_after_win() {
    let mut game = Game::new();

    game.make_move(Position::TopLeft).unwrap();
    game.make_move(Position::Center).unwrap();
    game.make_move(Position::TopCenter).unwrap();
    game.make_move(Position::BottomLeft).unwrap();
    game.make_move(Position::TopRight).unwrap();

    let before = game.state().clone();
    let result = game.make_move(Position::BottomRight);

    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game.state(), &before);
}

#[test]
fn test_draw_game() {
    let mut game = Game::new();

    // Fills the board X O X / X O O / O X X with no line for either side.
    let moves = [
        Position::TopLeft,      // X
        Position::TopCenter,    // O
        Position::TopRight,     // X
        Position::Center,       // O
        Position::MiddleLeft,   // X
        Position::MiddleRight,  // O
        Position::BottomCenter, // X
        Position::BottomLeft,   // O
        Position::BottomRight,  // X
    ];
    for pos in moves {
        game.make_move(pos).unwrap();
    }

    assert_eq!(game.state().status(), GameStatus::Draw);
    assert!(game.is_over());
}

#[test]
fn test_history_records_moves_in_order() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();
    game.make_move(Position::TopLeft).unwrap();

    assert_eq!(
        game.state().history(),
        &[Position::Center, Position::TopLeft]
    );
}

#[test]
fn test_game_state_serde_round_trip() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();
    game.make_move(Position::BottomRight).unwrap();

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: noughts::GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, game.state());
}
