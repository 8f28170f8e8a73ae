//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Highlighted cell on an N x N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
    side: usize,
}

impl Cursor {
    /// Places the cursor at the centre of a board with the given side length.
    pub fn centered(side: usize) -> Self {
        Self {
            row: side / 2,
            col: side / 2,
            side,
        }
    }

    /// Row under the cursor.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column under the cursor.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Checks if the cursor sits on the given cell.
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}

/// Moves cursor based on arrow keys. Stops at the board edges.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let last = cursor.side.saturating_sub(1);
    let (row, col) = match key {
        KeyCode::Up => (cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => ((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => (cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => (cursor.row, (cursor.col + 1).min(last)),
        _ => (cursor.row, cursor.col),
    };
    Cursor { row, col, ..cursor }
}
