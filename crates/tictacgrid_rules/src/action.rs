//! Move requests and the ways they can be refused.

use crate::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A placed mark: who played and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{player} -> ({row}, {col})")]
pub struct Move {
    /// The player that placed the mark.
    pub player: Player,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

/// Error returned when a move is refused.
///
/// None of these are fatal. The game state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The round already ended in a win or a draw.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Coordinates fall outside the grid.
    #[display("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already carries a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
}

/// Requested coordinates, before any bounds checking.
///
/// Signed so that a presentation bug handing over a negative index is
/// refused with [`MoveError::OutOfBounds`] instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct MoveRequest {
    /// Requested row.
    pub row: isize,
    /// Requested column.
    pub col: isize,
}

impl MoveRequest {
    /// Creates a new request.
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl From<(isize, isize)> for MoveRequest {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}
