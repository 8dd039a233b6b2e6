//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
///
/// A session starts with no mode; one is chosen at game start and cleared
/// again by reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans sharing the keyboard.
    TwoPlayer,
    /// Human (X) against the computer (O).
    VsComputer,
}

impl Mode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Two Player",
            Mode::VsComputer => "Vs Computer",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
