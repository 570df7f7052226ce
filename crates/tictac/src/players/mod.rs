//! Contestant trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use std::io::Write;
use tictac_engine::BoardState;

/// Trait for anything that can take a turn.
pub trait Contestant {
    /// Returns the board after this contestant's move.
    ///
    /// Prompts and progress are written to `out`.
    fn take_turn(&mut self, board: &BoardState, out: &mut dyn Write) -> Result<BoardState>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;

    /// Checks whether a person is entering the moves.
    fn is_human(&self) -> bool {
        false
    }
}
