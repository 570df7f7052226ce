//! Human player that types coordinates on the console.

use super::Contestant;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictac_engine::{BoardState, GameError};
use tracing::{debug, warn};

/// Human player reading `row` and `column` lines from input.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    /// Prompts until a non-negative integer is entered.
    fn read_coordinate(&mut self, prompt: &str, out: &mut dyn Write) -> Result<usize> {
        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before the game ended");
            }
            match line.trim().parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(out, "'{}' is not a valid coordinate", line.trim())?,
            }
        }
    }
}

impl<R: BufRead> Contestant for HumanPlayer<R> {
    fn take_turn(&mut self, board: &BoardState, out: &mut dyn Write) -> Result<BoardState> {
        loop {
            writeln!(out, "Your move:")?;
            let row = self.read_coordinate("Enter row...", out)?;
            let col = self.read_coordinate("Enter column...", out)?;

            match board.apply_move(row, col) {
                Ok(next) => {
                    debug!(player = %self.name, row, col, "Human move applied");
                    return Ok(next);
                }
                Err(e @ GameError::InvalidMove { .. }) => {
                    warn!(error = %e, "Rejected human move");
                    writeln!(out, "{}. Try again.", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictac_engine::{Cell, Player};

    #[test]
    fn test_reads_row_then_column() {
        let mut human = HumanPlayer::new("You", Cursor::new("2\n0\n"));
        let mut out = Vec::new();
        let next = human.take_turn(&BoardState::new(), &mut out).unwrap();
        assert_eq!(next.cell(2, 0), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_reprompts_on_garbage_and_invalid_moves() {
        let board = BoardState::new().apply_move(1, 1).unwrap();
        let mut human = HumanPlayer::new("You", Cursor::new("abc\n1\n1\n5\n0\n0\n2\n"));
        let mut out = Vec::new();
        let next = human.take_turn(&board, &mut out).unwrap();

        assert_eq!(next.cell(0, 2), Some(Cell::Occupied(Player::O)));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("'abc' is not a valid coordinate"));
        assert!(text.contains("cell already occupied. Try again."));
        assert!(text.contains("cell out of bounds. Try again."));
        assert_eq!(text.matches("Your move:").count(), 3);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut human = HumanPlayer::new("You", Cursor::new("1\n"));
        let mut out = Vec::new();
        assert!(human.take_turn(&BoardState::new(), &mut out).is_err());
    }
}
