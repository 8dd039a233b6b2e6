//! Session layer: the engine's call surface for a front end.
//!
//! A [`Session`] owns one game plus the mode selection and the
//! computer-move handshake. A front end forwards clicks into it and
//! renders from its read-only state.

use crate::ai;
use crate::game::{Game, MoveError};
use crate::mode::Mode;
use crate::position::Position;
use crate::rng::MoveRng;
use crate::types::GameStatus;
use tracing::{debug, info, instrument};

/// Error rejecting a session operation.
///
/// A front end is free to ignore these: every rejected operation leaves
/// the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// No game mode has been selected yet.
    #[display("no game mode selected")]
    NoModeSelected,

    /// A game mode was already selected for this game.
    #[display("game mode is already selected")]
    ModeAlreadySelected,

    /// A computer move is pending; human input is locked until it lands.
    #[display("the computer is still thinking")]
    ComputerThinking,

    /// `play_computer_move` was called with no move pending.
    #[display("no computer move is pending")]
    NoMovePending,

    /// The move itself was illegal.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// A single sitting at the board: mode, game, and the computer's turn.
///
/// The turn protocol differs by mode. In two-player mode every move comes
/// through [`Session::click_cell`] and the players simply alternate. In
/// vs-computer mode the human (always X) clicks, after which a computer
/// move becomes pending; the front end applies it with
/// [`Session::play_computer_move`] once its display delay has elapsed.
/// While the move is pending, clicks are rejected. [`Session::reset`]
/// clears the pending move along with everything else, so a reset during
/// the delay cancels the computer's reply.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    mode: Option<Mode>,
    computer_pending: bool,
    rng: MoveRng,
}

impl Session {
    /// Creates a session with an entropy-seeded RNG, for interactive play.
    pub fn new() -> Self {
        Self::with_rng(MoveRng::from_entropy())
    }

    /// Creates a session with a fixed RNG seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(MoveRng::new(seed))
    }

    /// Creates a session with the given RNG.
    pub fn with_rng(rng: MoveRng) -> Self {
        Self {
            game: Game::new(),
            mode: None,
            computer_pending: false,
            rng,
        }
    }

    /// Returns the current game (read-only snapshot for rendering).
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the selected mode, if any.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Selects the game mode. Allowed once per game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) -> Result<(), SessionError> {
        if self.mode.is_some() {
            return Err(SessionError::ModeAlreadySelected);
        }
        info!(%mode, "mode selected");
        self.mode = Some(mode);
        Ok(())
    }

    /// Applies a human click at the given position.
    ///
    /// Rejected (leaving the session unchanged) when no mode is selected,
    /// a computer move is pending, the game is over, or the square is
    /// occupied. In vs-computer mode a successful, non-terminal move marks
    /// the computer's reply as pending.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, position: Position) -> Result<(), SessionError> {
        let mode = self.mode.ok_or(SessionError::NoModeSelected)?;
        if self.computer_pending {
            return Err(SessionError::ComputerThinking);
        }

        self.game.make_move(position)?;

        if mode == Mode::VsComputer && !self.game.is_over() {
            // The human just played X; O's reply waits for the front
            // end's display delay.
            self.computer_pending = true;
        }

        Ok(())
    }

    /// Returns true between the human's move and the computer's reply.
    pub fn computer_move_pending(&self) -> bool {
        self.computer_pending
    }

    /// Applies the computer's reply and returns the position it played.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoMovePending`] unless a move is pending.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<Position, SessionError> {
        if !self.computer_pending {
            return Err(SessionError::NoMovePending);
        }
        self.computer_pending = false;

        // A move only becomes pending while the game is in progress, so
        // the board has an open square.
        let position = ai::choose_move(self.game.state().board(), &mut self.rng)
            .expect("pending computer move implies an open square");
        self.game.make_move(position)?;
        debug!(position = %position, "computer played");

        Ok(position)
    }

    /// Returns to the initial state: board cleared, no mode, X to move,
    /// no pending computer move. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("session reset");
        self.game = Game::new();
        self.mode = None;
        self.computer_pending = false;
    }

    /// Status text derived purely from session state: mode prompt, turn
    /// indicator, thinking notice, winner announcement, or draw.
    pub fn status_line(&self) -> String {
        if self.mode.is_none() {
            return "Choose a game mode to start.".to_string();
        }
        if self.computer_pending {
            return "Computer is thinking...".to_string();
        }
        match self.game.state().status() {
            GameStatus::InProgress => {
                format!("Player {:?}'s turn", self.game.state().current_player())
            }
            GameStatus::Won(player) => format!("Player {player:?} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
