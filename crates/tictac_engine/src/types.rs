//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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

    /// Returns the player whose turn it is after `move_count` moves.
    pub fn to_move_after(move_count: usize) -> Self {
        if move_count % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Three-character display form used by the board renderer.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " - ",
            Cell::Occupied(Player::X) => " X ",
            Cell::Occupied(Player::O) => " O ",
        }
    }
}

/// Decided state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty cells remain.
    InProgress,
    /// Player completed a line.
    Won(Player),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game can no longer continue.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_to_move_alternates() {
        assert_eq!(Player::to_move_after(0), Player::X);
        assert_eq!(Player::to_move_after(1), Player::O);
        assert_eq!(Player::to_move_after(8), Player::X);
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), " - ");
        assert_eq!(Cell::Occupied(Player::X).symbol(), " X ");
        assert_eq!(Cell::Occupied(Player::O).symbol(), " O ");
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::InProgress.is_decided());
        assert!(Outcome::Draw.is_decided());
    }
}
