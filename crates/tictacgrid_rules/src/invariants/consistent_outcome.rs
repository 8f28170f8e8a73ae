//! Consistent outcome invariant: the recorded outcome matches the grid.

use super::Invariant;
use crate::rules::{find_winning_line, is_draw, is_full};
use crate::{GameState, Outcome};

/// Invariant: the outcome agrees with what the rules see on the board.
///
/// - `InProgress`: no line and at least one empty cell
/// - `Win(p)`: a line owned by `p`, and `p` made the last move
/// - `Draw`: full board, no line
pub struct ConsistentOutcomeInvariant;

impl Invariant<GameState> for ConsistentOutcomeInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        match game.outcome() {
            Outcome::InProgress => find_winning_line(board).is_none() && !is_full(board),
            Outcome::Win(player) => {
                find_winning_line(board).map(|line| line.player) == Some(player)
                    && game.last_move().map(|mov| mov.player) == Some(player)
            }
            Outcome::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Outcome matches the board (line means win, full means draw)"
    }
}
