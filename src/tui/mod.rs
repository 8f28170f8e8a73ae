//! Terminal UI: name entry, size selection and the game itself.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::PartialConfig;

pub use controller::Controller;
pub use input::{Cursor, move_cursor};
pub use screen::{Screen, ScreenTransition};
pub use screens::{InGameScreen, NameEntryScreen, SizeSelectScreen};

/// Runs the TUI until the players quit.
///
/// Configuration errors are reported before the terminal is touched.
#[instrument(skip(partial))]
pub fn run_tui(partial: PartialConfig) -> Result<()> {
    let mut controller = Controller::new(partial)?;

    info!("Starting TicTacGrid TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    res
}
