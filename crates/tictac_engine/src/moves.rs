//! Moves and move enumeration.

use crate::board::BoardState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: the zero-based `(row, col)` cell receiving the next mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this move.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Lists the empty cells of a board in row-major order.
///
/// A decided board has no feasible moves even if empty cells remain, so
/// search never branches past a finished game.
#[instrument(level = "trace", skip(board), fields(move_count = board.move_count()))]
pub fn feasible_moves(board: &BoardState) -> Vec<Move> {
    if board.is_decided() {
        return Vec::new();
    }

    let size = board.size();
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(i, _)| Move::new(i / size, i % size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    #[test]
    fn test_empty_board_all_cells_in_order() {
        let moves = feasible_moves(&BoardState::new());
        let expected: Vec<Move> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Move::new(row, col)))
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_filters_occupied() {
        let board = BoardState::new().apply_move(0, 0).unwrap();
        let board = board.apply_move(1, 1).unwrap();
        let moves = feasible_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
        assert_eq!(moves.first(), Some(&Move::new(0, 1)));
    }

    #[test]
    fn test_decided_board_has_no_moves() {
        let x = Cell::Occupied(Player::X);
        let o = Cell::Occupied(Player::O);
        let e = Cell::Empty;
        let board = BoardState::from_rows(vec![vec![x, x, x], vec![o, o, e], vec![e, e, e]])
            .unwrap();
        assert!(board.is_decided());
        assert!(feasible_moves(&board).is_empty());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::from((2, 1)).to_string(), "(2, 1)");
    }
}
