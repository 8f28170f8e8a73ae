//! Pure game logic for tic-tac-toe on square grids of any size from 3x3 up.
//!
//! Three marks in a row win on every board size. The crate has no I/O and
//! no timers: a front-end creates a [`GameState`], forwards moves to
//! [`GameState::apply_move`], and replaces the state when it wants a new
//! round.
//!
//! # Example
//!
//! ```
//! use tictacgrid_rules::{BoardSize, GameState, Outcome, Player};
//!
//! let size = BoardSize::new(4).unwrap();
//! let mut game = GameState::new(size, Player::X);
//! for (row, col) in [(1, 1), (0, 3), (2, 2), (0, 2)] {
//!     game.apply_move(row, col).unwrap();
//! }
//! assert_eq!(game.apply_move(3, 3), Ok(Outcome::Win(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveRequest};
pub use game::GameState;
pub use rules::{Direction, WinningLine, check_winner, find_winning_line, is_full};
pub use types::{Board, BoardSize, BoardSizeError, Cell, Outcome, Player};
