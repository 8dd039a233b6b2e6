//! Noughts - pure tic-tac-toe game logic.
//!
//! This crate holds the complete rules engine: board state, win and draw
//! detection, turn handling, and the computer opponent. It has no terminal
//! or async dependencies; a front end drives it through [`Session`].
//!
//! # Example
//!
//! ```
//! use noughts::{Mode, Position, Session};
//!
//! let mut session = Session::with_seed(42);
//! session.select_mode(Mode::VsComputer)?;
//! session.click_cell(Position::Center)?;
//! assert!(session.computer_move_pending());
//! let reply = session.play_computer_move()?;
//! assert_ne!(reply, Position::Center);
//! # Ok::<(), noughts::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod game;
mod mode;
mod position;
mod rng;
mod rules;
mod session;
mod types;

pub use ai::{choose_move, winning_move};
pub use game::{Game, MoveError};
pub use mode::Mode;
pub use position::Position;
pub use rng::MoveRng;
pub use rules::{LINES, check_winner, is_full};
pub use session::{Session, SessionError};
pub use types::{Board, GameState, GameStatus, Mark, Player, Square};
