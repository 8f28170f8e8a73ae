//! Game rules for grid tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the move contract can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Direction, WIN_LENGTH, WinningLine, check_winner, find_winning_line};
