//! Fixed dimensions invariant: the grid always holds size x size cells.

use super::Invariant;
use crate::GameState;

/// Invariant: the cell storage matches the board's side length.
pub struct FixedDimensionsInvariant;

impl Invariant<GameState> for FixedDimensionsInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        board.cells().len() == board.size().cell_count()
            && board.rows().all(|row| row.len() == board.side())
    }

    fn description() -> &'static str {
        "Grid holds exactly size x size cells"
    }
}
