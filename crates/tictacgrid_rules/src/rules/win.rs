//! Win detection: three equal marks in a row anywhere on the board.
//!
//! The board is scanned with a sliding three-cell window along rows,
//! columns and both diagonal directions. A window wins when its three
//! cells carry the same mark.

use crate::{Board, Cell, Player};
use serde::Serialize;
use tracing::instrument;

/// Number of marks in a row needed to win, independent of board size.
pub const WIN_LENGTH: usize = 3;

/// Direction of a winning window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Direction {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A completed three-cell window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    /// Owner of the three marks.
    pub player: Player,
    /// Scan direction that found the window.
    pub direction: Direction,
    /// `(row, col)` of each cell, in scan order.
    pub cells: [(usize, usize); WIN_LENGTH],
}

impl WinningLine {
    /// Checks if the given cell is part of this line.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Checks if any player has three in a row.
#[instrument(skip(board), fields(size = board.side()))]
pub fn check_winner(board: &Board) -> bool {
    find_winning_line(board).is_some()
}

/// Returns the first winning window found, scanning rows, columns, then diagonals.
#[instrument(skip(board), fields(size = board.side()))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let n = board.side();
    let last_start = n - WIN_LENGTH;

    // Rows
    for i in 0..n {
        for j in 0..=last_start {
            let cells = [(i, j), (i, j + 1), (i, j + 2)];
            if let Some(line) = window(board, Direction::Row, cells) {
                return Some(line);
            }
        }
    }

    // Columns
    for i in 0..n {
        for j in 0..=last_start {
            let cells = [(j, i), (j + 1, i), (j + 2, i)];
            if let Some(line) = window(board, Direction::Column, cells) {
                return Some(line);
            }
        }
    }

    // Diagonals
    for i in 0..=last_start {
        for j in 0..=last_start {
            let main = [(i, j), (i + 1, j + 1), (i + 2, j + 2)];
            if let Some(line) = window(board, Direction::MainDiagonal, main) {
                return Some(line);
            }

            // Start column is mirrored from the right edge: j = 0 starts at
            // column n - 1 and j = n - 3 at column 2. The index arithmetic is
            // asymmetric with the main diagonal, but together the starts cover
            // every anti-diagonal window (see test_every_anti_diagonal_window_is_found).
            let anti = [(i, n - j - 1), (i + 1, n - j - 2), (i + 2, n - j - 3)];
            if let Some(line) = window(board, Direction::AntiDiagonal, anti) {
                return Some(line);
            }
        }
    }

    None
}

fn window(
    board: &Board,
    direction: Direction,
    cells: [(usize, usize); WIN_LENGTH],
) -> Option<WinningLine> {
    let [a, b, c] = cells.map(|(row, col)| board.at(row, col));
    match a {
        Cell::Marked(player) if a == b && a == c => Some(WinningLine {
            player,
            direction,
            cells,
        }),
        _ => None,
    }
}
