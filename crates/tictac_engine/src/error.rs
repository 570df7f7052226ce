//! Error types for board operations and search.

use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// Coordinates fall outside the grid.
    #[display("out of bounds")]
    OutOfBounds,
    /// The cell already carries a mark.
    #[display("already occupied")]
    Occupied,
}

/// Error that can occur when applying a move or searching a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The target cell is out of range or already marked.
    #[display("Invalid move ({}, {}): cell {}", row, col, reason)]
    InvalidMove {
        /// Row of the rejected move.
        row: usize,
        /// Column of the rejected move.
        col: usize,
        /// Reason for rejection.
        reason: MoveRejection,
    },

    /// A strategy was asked to move on a decided board.
    #[display("No feasible moves: the game is already decided")]
    NoFeasibleMoves,

    /// A grid passed to a constructor is not square.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(#[error(not(source))] String),
}

impl GameError {
    /// Creates an out-of-bounds move error.
    pub fn out_of_bounds(row: usize, col: usize) -> Self {
        GameError::InvalidMove {
            row,
            col,
            reason: MoveRejection::OutOfBounds,
        }
    }

    /// Creates an occupied-cell move error.
    pub fn occupied(row: usize, col: usize) -> Self {
        GameError::InvalidMove {
            row,
            col,
            reason: MoveRejection::Occupied,
        }
    }
}
