//! Core domain types for grid tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player one, marks with X.
    X,
    /// Player two, marks with O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the character drawn for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell carries a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Side length of a square board.
///
/// Always at least [`BoardSize::MIN`], since the win length is fixed at three,
/// and at most [`BoardSize::MAX`] so the cell vector can always be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}x{_0}")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest playable board.
    pub const MIN: usize = 3;

    /// Largest board the engine will allocate.
    pub const MAX: usize = 1024;

    /// Classic 3x3 board.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Creates a board size within [`BoardSize::MIN`]..=[`BoardSize::MAX`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if size < Self::MIN {
            return Err(BoardSizeError::TooSmall { size });
        }
        if size > Self::MAX {
            return Err(BoardSizeError::TooLarge { size });
        }
        Ok(Self(size))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// A board side length outside the playable range was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardSizeError {
    /// Fewer sides than a three-cell window needs.
    #[display("Board size {size} is too small (minimum is {})", BoardSize::MIN)]
    TooSmall {
        /// The rejected side length.
        size: usize,
    },
    /// More cells than the engine will allocate.
    #[display("Board size {size} is too large (maximum is {})", BoardSize::MAX)]
    TooLarge {
        /// The rejected side length.
        size: usize,
    },
}

/// Square board stored row-major.
///
/// The dimensions are fixed when the board is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length as a plain integer.
    pub fn side(&self) -> usize {
        self.size.get()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let side = self.side();
        (row < side && col < side).then(|| row * side + col)
    }

    /// Gets the cell at the given coordinates, `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Gets a cell the caller already knows is on the board.
    ///
    /// Used by the win scan, whose windows never leave the grid.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.side() + col]
    }

    /// Sets the cell at the given coordinates. Returns false when off the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Checks if the cell is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(player))
            .count()
    }

    /// Formats the board as a human-readable grid, `.` for empty cells.
    pub fn display(&self) -> String {
        let separator = vec!["-"; self.side()].join("+");
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.'.to_string(),
                        Cell::Marked(player) => player.symbol().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{separator}\n"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

/// Outcome of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    InProgress,
    /// The named player completed a line.
    Win(Player),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the round has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
