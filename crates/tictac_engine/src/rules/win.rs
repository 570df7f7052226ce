//! Win detection logic.

use crate::types::{Cell, Player};
use tracing::instrument;

/// One of the 2N+2 lines of an N×N grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// All rows of one column.
    Column(usize),
    /// All columns of one row.
    Row(usize),
    /// Cells `(i, i)`.
    Diagonal,
    /// Cells `(i, N-1-i)`.
    AntiDiagonal,
}

impl Line {
    /// Every line of a grid of the given size, in scan order:
    /// columns, then rows, then the two diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Column)
            .chain((0..size).map(Line::Row))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Coordinates `(row, col)` along this line.
    pub fn coordinates(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Line::Column(col) => (i, col),
            Line::Row(row) => (row, i),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (i, size - 1 - i),
        })
    }

    /// Returns the player owning every cell of this line, if any.
    ///
    /// The scan stops at the first empty or mismatching cell.
    pub fn owner(self, cells: &[Cell], size: usize) -> Option<Player> {
        let mut owner = None;
        for (row, col) in self.coordinates(size) {
            let player = cells[row * size + col].player()?;
            match owner {
                None => owner = Some(player),
                Some(reference) if reference != player => return None,
                Some(_) => {}
            }
        }
        owner
    }
}

/// Checks if any line of the grid is completed by a single player.
///
/// Returns the owner of the first completed line in scan order.
#[instrument(level = "trace", skip(cells))]
pub fn check_winner(cells: &[Cell], size: usize) -> Option<Player> {
    Line::all(size).find_map(|line| line.owner(cells, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(marks: &str) -> Vec<Cell> {
        marks
            .chars()
            .map(|c| match c {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                _ => Cell::Empty,
            })
            .collect()
    }

    #[test]
    fn test_line_count() {
        assert_eq!(Line::all(3).count(), 8);
        assert_eq!(Line::all(4).count(), 10);
    }

    #[test]
    fn test_anti_diagonal_coordinates() {
        let coords: Vec<_> = Line::AntiDiagonal.coordinates(3).collect();
        assert_eq!(coords, vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&grid("........."), 3), None);
    }

    #[test]
    fn test_winner_row() {
        assert_eq!(check_winner(&grid("XXXOO...."), 3), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&grid("OX.OX.O.X"), 3), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&grid("O.X.OX..O"), 3), Some(Player::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        assert_eq!(check_winner(&grid("XXOOOXXXO"), 3), None);
    }

    #[test]
    fn test_first_completed_line_wins() {
        // Column 0 is all O and column 2 is all X.
        let cells = grid("O.XO.XO.X");
        assert_eq!(Line::Column(2).owner(&cells, 3), Some(Player::X));
        assert_eq!(check_winner(&cells, 3), Some(Player::O));
    }

    #[test]
    fn test_four_by_four_anti_diagonal() {
        let cells = grid("...X..X..X..X...");
        assert_eq!(check_winner(&cells, 4), Some(Player::X));
    }
}
