//! Game state and move application.
//!
//! A [`GameState`] is created fresh for every round and mutated one legal
//! move at a time. It is never rolled back: a reset replaces it wholesale.

use super::action::{Move, MoveError, MoveRequest};
use super::contracts::{Contract, MoveContract};
use super::rules::{self, WinningLine};
use super::{Board, BoardSize, Cell, Outcome, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete state of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) starting_player: Player,
    pub(crate) current_player: Player,
    pub(crate) outcome: Outcome,
    pub(crate) last_move: Option<Move>,
}

impl GameState {
    /// Creates a fresh round: empty grid, `starting` to move, in progress.
    #[instrument]
    pub fn new(size: BoardSize, starting: Player) -> Self {
        debug!("Creating fresh board");
        Self {
            board: Board::new(size),
            starting_player: starting,
            current_player: starting,
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Preconditions are checked in order: the round is still running,
    /// the coordinates are on the grid, the cell is empty. On success the
    /// mark, the outcome and the turn are updated together and the new
    /// outcome is returned. A winning or drawing move leaves the turn with
    /// the player who made it.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameAlreadyOver`], [`MoveError::OutOfBounds`] or
    /// [`MoveError::CellOccupied`]. The state is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player, size = self.board.side()))]
    pub fn apply_move(&mut self, row: isize, col: isize) -> Result<Outcome, MoveError> {
        let request = MoveRequest::new(row, col);
        let (row, col) = MoveContract::pre(self, &request).inspect_err(|error| {
            debug!(%error, "Move refused");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        let placed = self.board.set(row, col, Cell::Marked(player));
        debug_assert!(placed, "({row}, {col}) passed the preconditions but was not placed");
        self.last_move = Some(Move { player, row, col });

        if rules::check_winner(&self.board) {
            self.outcome = Outcome::Win(player);
            info!(%player, "Round won");
        } else if rules::is_full(&self.board) {
            self.outcome = Outcome::Draw;
            info!("Round drawn");
        } else {
            self.current_player = player.opponent();
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, self).is_ok(),
            "Move postcondition failed: {:?}",
            MoveContract::post(&before, self).err()
        );

        Ok(self.outcome)
    }

    /// Plays a sequence of moves on a fresh board, stopping at the first refusal.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(
        size: BoardSize,
        starting: Player,
        moves: &[(isize, isize)],
    ) -> Result<Self, MoveError> {
        let mut game = Self::new(size, starting);
        for &(row, col) in moves {
            game.apply_move(row, col)?;
        }
        Ok(game)
    }

    /// Returns the cell at `(row, col)`, `None` when off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Returns the player to move (the winner once the round is won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who opened this round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the most recent mark placed this round.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the completed line when the round has been won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            Outcome::Win(_) => rules::find_winning_line(&self.board),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new(BoardSize::new(5).unwrap(), Player::O);
        assert_eq!(game.size().get(), 5);
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.starting_player(), Player::O);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.last_move(), None);
        assert!(game.board().cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_move_toggles_turn() {
        let mut game = GameState::new(BoardSize::CLASSIC, Player::X);
        assert_eq!(game.apply_move(1, 1), Ok(Outcome::InProgress));
        assert_eq!(game.cell_at(1, 1), Some(Cell::Marked(Player::X)));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(
            game.last_move(),
            Some(Move {
                player: Player::X,
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let mut game =
            GameState::replay(BoardSize::CLASSIC, Player::O, &[(2, 0), (0, 0), (2, 1), (0, 1)])
                .unwrap();
        assert_eq!(game.apply_move(2, 2), Ok(Outcome::Win(Player::O)));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.winning_line().map(|l| l.cells), Some([(2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn test_refused_move_leaves_state() {
        let mut game = GameState::replay(BoardSize::CLASSIC, Player::X, &[(0, 0)]).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply_move(0, 0),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Move postcondition failed")]
    fn test_corrupted_turn_trips_postcondition() {
        let mut game = GameState::new(BoardSize::CLASSIC, Player::X);
        game.current_player = Player::O;
        let _ = game.apply_move(0, 0);
    }

    #[test]
    fn test_no_winning_line_while_in_progress() {
        let game = GameState::new(BoardSize::CLASSIC, Player::X);
        assert_eq!(game.winning_line(), None);
    }
}
