//! Headless replay: apply a list of `row,col` moves and print the result.

use anyhow::{Context, Result, bail};
use std::io::Write;
use tictacgrid_rules::{GameState, Outcome, Player};

use crate::config::validate_size;
use tracing::{debug, instrument};

/// Parses a move written as `row,col`.
#[instrument]
pub fn parse_move(text: &str) -> Result<(isize, isize)> {
    let Some((row, col)) = text.split_once(',') else {
        bail!("Move {:?} is not in row,col form", text);
    };
    let row = row
        .trim()
        .parse()
        .with_context(|| format!("Invalid row in move {:?}", text))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("Invalid column in move {:?}", text))?;
    Ok((row, col))
}

/// Plays `moves` on a fresh board and writes refusals, the board and the outcome to `out`.
///
/// Refused moves are reported and skipped. An unoffered board size or
/// malformed move text stops the replay before any move is applied.
#[instrument(skip(moves, out), fields(count = moves.len()))]
pub fn run_replay(
    size: usize,
    first: Player,
    moves: &[String],
    out: &mut impl Write,
) -> Result<Outcome> {
    let size = validate_size(size)?;
    let parsed = moves
        .iter()
        .map(|text| parse_move(text))
        .collect::<Result<Vec<_>>>()?;

    let mut game = GameState::new(size, first);
    for (number, (row, col)) in parsed.into_iter().enumerate() {
        let player = game.current_player();
        match game.apply_move(row, col) {
            Ok(outcome) => debug!(number, %player, ?outcome, "Move applied"),
            Err(error) => writeln!(out, "move {} ({}, {}) refused: {}", number + 1, row, col, error)?,
        }
    }

    writeln!(out, "{}", game.board().display())?;
    writeln!(out, "{}", game.outcome())?;
    Ok(game.outcome())
}
