//! Immutable board snapshots.

use crate::error::GameError;
use crate::moves::{self, Move};
use crate::rules;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Standard tic-tac-toe board size.
pub const STANDARD_SIZE: usize = 3;

/// Snapshot of an N×N tic-tac-toe grid.
///
/// Cells are addressed as `(row, col)`, zero-based. Row 0 is the bottom
/// line of the rendered board. A `BoardState` never changes after
/// construction; [`BoardState::apply_move`] returns a new snapshot.
///
/// Deserialized boards are rebuilt from their cells, so a mismatched move
/// count or outcome is rejected rather than trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardState")]
pub struct BoardState {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    move_count: usize,
    outcome: Outcome,
}

impl BoardState {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            move_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Creates an empty standard 3×3 board.
    pub fn new() -> Self {
        Self::empty(STANDARD_SIZE)
    }

    /// Builds a board directly from a grid given as rows (`rows[row][col]`).
    ///
    /// The move count is taken from the number of occupied cells and the
    /// outcome is scanned from scratch. Grids that could not arise in play
    /// are accepted; the first completed line in scan order decides them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoard`] if the grid is not square.
    #[instrument(skip(rows), fields(row_count = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GameError> {
        let size = rows.len();
        if let Some(bad) = rows.iter().position(|row| row.len() != size) {
            return Err(GameError::InvalidBoard(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                size
            )));
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let move_count = cells.iter().filter(|c| !c.is_empty()).count();
        Ok(Self::with_cells(size, cells, move_count))
    }

    /// Shared constructor: derives the outcome once enough moves exist.
    fn with_cells(size: usize, cells: Vec<Cell>, move_count: usize) -> Self {
        let outcome = if move_count >= rules::min_moves_to_decide(size) {
            rules::determine_outcome(&cells, size, move_count)
        } else {
            Outcome::InProgress
        };
        Self {
            size,
            cells,
            move_count,
            outcome,
        }
    }

    /// Returns a new board with the next player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the cell is out of range or
    /// already occupied. The receiver is left untouched either way.
    #[instrument(level = "trace", skip(self), fields(player = %self.next_to_move(), move_count = self.move_count))]
    pub fn apply_move(&self, row: usize, col: usize) -> Result<Self, GameError> {
        let index = self
            .index(row, col)
            .ok_or_else(|| GameError::out_of_bounds(row, col))?;
        if !self.cells[index].is_empty() {
            return Err(GameError::occupied(row, col));
        }

        let mut cells = self.cells.clone();
        cells[index] = Cell::Occupied(self.next_to_move());
        let next = Self::with_cells(self.size, cells, self.move_count + 1);
        if next.outcome.is_decided() {
            trace!(outcome = %next.outcome, "Move decided the game");
        }
        Ok(next)
    }

    /// Applies a [`Move`].
    pub fn play(&self, mv: Move) -> Result<Self, GameError> {
        self.apply_move(mv.row(), mv.col())
    }

    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the player whose mark the next move places.
    pub fn next_to_move(&self) -> Player {
        Player::to_move_after(self.move_count)
    }

    /// Returns the outcome computed at construction.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks whether the game on this board is over.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Checks if the cell at `(row, col)` is in range and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty cells as moves, or nothing once the game is decided.
    pub fn feasible_moves(&self) -> Vec<Move> {
        moves::feasible_moves(self)
    }

    /// Formats the board for display.
    ///
    /// The highest row comes first and row 0 last; each cell is three
    /// characters wide and every line ends with `'\n'`.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.size * (self.size * 3 + 1));
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                result.push_str(self.cells[row * self.size + col].symbol());
            }
            result.push('\n');
        }
        result
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

/// Serialized form of a [`BoardState`] before validation.
#[derive(Deserialize)]
struct RawBoardState {
    size: usize,
    cells: Vec<Cell>,
    move_count: usize,
    outcome: Outcome,
}

impl TryFrom<RawBoardState> for BoardState {
    type Error = GameError;

    fn try_from(raw: RawBoardState) -> Result<Self, Self::Error> {
        let expected = raw.size.checked_mul(raw.size);
        if expected != Some(raw.cells.len()) {
            return Err(GameError::InvalidBoard(format!(
                "{} cells do not fill a {}x{} grid",
                raw.cells.len(),
                raw.size,
                raw.size
            )));
        }

        let marks = raw.cells.iter().filter(|c| !c.is_empty()).count();
        if marks != raw.move_count {
            return Err(GameError::InvalidBoard(format!(
                "move_count {} but {} cells are marked",
                raw.move_count, marks
            )));
        }

        let board = Self::with_cells(raw.size, raw.cells, marks);
        if board.outcome != raw.outcome {
            return Err(GameError::InvalidBoard(format!(
                "outcome {} but the grid is {}",
                raw.outcome, board.outcome
            )));
        }
        Ok(board)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
