//! Contract-based validation for grid tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions are always checked and decide which
//! [`MoveError`] a refused move reports. Postconditions re-verify the
//! game invariants after a move and run in debug builds.

use super::action::{MoveError, MoveRequest};
use super::invariants::{GridInvariants, InvariantSet, InvariantViolation};
use super::{Cell, GameState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Valid;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Valid, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Refuses any move once the round has a winner or is drawn.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.outcome().is_terminal() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates lie on the grid.
pub struct InBounds;

impl InBounds {
    /// Returns the coordinates as grid indices.
    #[instrument(skip(game))]
    pub fn check(request: &MoveRequest, game: &GameState) -> Result<(usize, usize), MoveError> {
        let size = game.size().get();
        let index = |value: isize| usize::try_from(value).ok().filter(|v| *v < size);
        match (index(request.row), index(request.col)) {
            (Some(row), Some(col)) => Ok((row, col)),
            _ => Err(MoveError::OutOfBounds {
                row: request.row,
                col: request.col,
                size,
            }),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Refuses a move onto a marked cell.
    #[instrument(skip(game))]
    pub fn check(row: usize, col: usize, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(row, col) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied { row, col })
        }
    }
}

/// Composite precondition, checked in order: round still running,
/// coordinates on the grid, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(request: &MoveRequest, game: &GameState) -> Result<(usize, usize), MoveError> {
        GameInProgress::check(game)?;
        let (row, col) = InBounds::check(request, game)?;
        CellIsEmpty::check(row, col, game)?;
        Ok((row, col))
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - exactly one cell went from empty to the mover's mark
/// - every other cell is unchanged and the grid kept its size
/// - all [`GridInvariants`] hold on the new state
pub struct MoveContract;

impl Contract<GameState, MoveRequest> for MoveContract {
    type Valid = (usize, usize);

    fn pre(game: &GameState, action: &MoveRequest) -> Result<(usize, usize), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if let Err(violation) = single_new_mark(before, after) {
            violations.push(violation);
        }
        if let Err(mut set) = GridInvariants::check_all(after) {
            violations.append(&mut set);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}

/// Compares two states cell by cell.
fn single_new_mark(before: &GameState, after: &GameState) -> Result<(), InvariantViolation> {
    if before.size() != after.size() {
        return Err(InvariantViolation::new("Grid dimensions changed"));
    }

    let changed: Vec<(Cell, Cell)> = before
        .board()
        .cells()
        .iter()
        .zip(after.board().cells())
        .filter(|(old, new)| old != new)
        .map(|(old, new)| (*old, *new))
        .collect();

    match changed.as_slice() {
        [(Cell::Empty, Cell::Marked(player))] if *player == before.current_player() => Ok(()),
        _ => Err(InvariantViolation::new(
            "Exactly one empty cell receives the mover's mark",
        )),
    }
}
