//! TicTacGrid: two-player tic-tac-toe on N x N boards.
//!
//! Three marks in a row win on every board size. This crate wraps the
//! rules from [`tictacgrid_rules`] in a terminal front-end.
//!
//! # Architecture
//!
//! - **Config**: player names and board size from TOML files and flags
//! - **Session**: round lifecycle with the timed automatic reset
//! - **Replay**: headless playback of a move list
//! - **TUI**: name entry, size selection and the game screen
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use tictacgrid::{GameConfig, RoundSession};
//! use tictacgrid_rules::{Outcome, Player};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::new("Ana", "Luis", 4)?;
//! let mut session = RoundSession::new(config);
//! let now = Instant::now();
//! session.play(0, 0, now)?;
//! assert_eq!(session.game().current_player(), Player::O);
//! assert_eq!(session.game().outcome(), Outcome::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod replay;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{
    ConfigError, GameConfig, PartialConfig, SELECTABLE_SIZES, validate_name, validate_size,
};

// Crate-level exports - Round lifecycle
pub use session::{RESET_DELAY, RoundSession};

// Crate-level exports - Headless replay
pub use replay::{parse_move, run_replay};

// Crate-level exports - Terminal UI
pub use tui::{
    Controller, Cursor, InGameScreen, NameEntryScreen, Screen, ScreenTransition,
    SizeSelectScreen, move_cursor, run_tui,
};
