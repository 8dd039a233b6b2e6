//! Application state and logic.

use crossterm::event::KeyCode;
use noughts::{Mode, Position, Session};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::input;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode selection menu.
    ModeSelect,
    /// The board.
    Playing,
}

const MODE_PROMPT: &str = "Choose a game mode to start.";

/// Main application state.
pub struct App {
    session: Session,
    screen: Screen,
    cursor: Position,
    status_message: String,
    computer_delay: Duration,
    timer_tx: mpsc::UnboundedSender<()>,
    computer_timer: Option<JoinHandle<()>>,
}

impl App {
    /// Creates a new application.
    ///
    /// `timer_tx` receives a message when the computer's display delay has
    /// elapsed; the event loop answers it by calling
    /// [`App::computer_reply`].
    pub fn new(
        session: Session,
        computer_delay: Duration,
        timer_tx: mpsc::UnboundedSender<()>,
    ) -> Self {
        Self {
            session,
            screen: Screen::ModeSelect,
            cursor: Position::Center,
            status_message: MODE_PROMPT.to_string(),
            computer_delay,
            timer_tx,
            computer_timer: None,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the cursor position on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press for the current screen.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::ModeSelect => match key {
                KeyCode::Char('1') => self.select_mode(Mode::TwoPlayer),
                KeyCode::Char('2') => self.select_mode(Mode::VsComputer),
                _ => {}
            },
            Screen::Playing => match key {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let digit = c.to_digit(10).unwrap_or(0) as usize;
                    if let Some(position) =
                        digit.checked_sub(1).and_then(Position::from_index)
                    {
                        self.cursor = position;
                        self.click(position);
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.cursor = input::move_cursor(self.cursor, key);
                }
                _ => {}
            },
        }
    }

    fn select_mode(&mut self, mode: Mode) {
        if self.session.select_mode(mode).is_ok() {
            self.screen = Screen::Playing;
            self.status_message = self.session.status_line();
        }
    }

    /// Attempts the human move at the given position.
    ///
    /// Illegal clicks (occupied square, game over, computer thinking) are
    /// silently ignored; the board stays as it was.
    fn click(&mut self, position: Position) {
        match self.session.click_cell(position) {
            Ok(()) => {
                if self.session.computer_move_pending() {
                    self.schedule_computer_move();
                }
                self.status_message = self.session.status_line();
            }
            Err(e) => {
                debug!(position = %position, error = %e, "click ignored");
            }
        }
    }

    /// Starts the display-delay timer for the computer's reply.
    fn schedule_computer_move(&mut self) {
        let tx = self.timer_tx.clone();
        let delay = self.computer_delay;
        self.computer_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(());
        }));
    }

    /// Applies the computer's reply after its delay has elapsed.
    ///
    /// A stale timer message (one that raced a reset) finds no pending
    /// move and does nothing.
    pub fn computer_reply(&mut self) {
        self.computer_timer = None;
        match self.session.play_computer_move() {
            Ok(position) => {
                self.status_message =
                    format!("Computer played {}. {}", position.label(), self.session.status_line());
            }
            Err(e) => {
                debug!(error = %e, "timer fired with nothing to play");
            }
        }
    }

    /// Starts a new game: cancels any scheduled computer move, clears the
    /// session, and returns to mode selection.
    pub fn restart(&mut self) {
        debug!("restarting game");
        if let Some(timer) = self.computer_timer.take() {
            timer.abort();
        }
        self.session.reset();
        self.screen = Screen::ModeSelect;
        self.cursor = Position::Center;
        self.status_message = MODE_PROMPT.to_string();
    }
}
