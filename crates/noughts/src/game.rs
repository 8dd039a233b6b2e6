//! Game state machine: validated moves and status transitions.

use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::instrument;

/// Error rejecting an illegal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// Wraps [`GameState`] and enforces move legality: marks only land in
/// empty squares, and nothing lands after the game has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true if the game has ended in a win or a draw.
    pub fn is_over(&self) -> bool {
        self.state.status() != GameStatus::InProgress
    }

    /// Makes a move at the given position for the current player.
    ///
    /// On success the mark is placed, the status is recomputed, and the
    /// turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once a winner or draw is set, and
    /// [`MoveError::SquareOccupied`] for a non-empty square. A rejected
    /// move leaves the state untouched.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn make_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.state.current_player();
        self.state.place(position, player);
        self.update_status();

        Ok(())
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
