//! Draw detection logic.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if every cell carries a mark.
#[instrument(skip(board), fields(size = board.side()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Checks if the board is a draw (full with no winner).
#[instrument(skip(board), fields(size = board.side()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_winner(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Cell, Player};

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(BoardSize::new(rows.len()).unwrap());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Marked(Player::X),
                    'O' => Cell::Marked(Player::O),
                    _ => Cell::Empty,
                };
                board.set(r, c, cell);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from(&["XOX", "OXO", "OX."])));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(&["XOX", "XOO", "OXX"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from(&["XOX", "OXO", "OXX"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_on_four() {
        let board = board_from(&["XXOO", "OOXX", "XXOO", "OOXX"]);
        assert!(is_draw(&board));
    }
}
