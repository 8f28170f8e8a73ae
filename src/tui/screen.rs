//! Screen trait and transition type for the setup and play state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Instant;
use tictacgrid_rules::BoardSize;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// controller's state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Names are entered, pick the board size next.
    GoToSizeSelect {
        /// Validated name for X.
        player_one: String,
        /// Validated name for O.
        player_two: String,
    },
    /// Size is chosen, start playing.
    StartGame(BoardSize),
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Advances time-driven state. Called once per loop iteration.
    fn tick(&mut self, _now: Instant) {}
}
