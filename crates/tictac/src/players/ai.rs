//! Computer player backed by a search strategy.

use super::Contestant;
use anyhow::Result;
use std::io::Write;
use tictac_engine::{BoardState, SearchStrategy};
use tracing::debug;

/// Computer player that delegates to a [`SearchStrategy`].
pub struct AiPlayer {
    strategy: Box<dyn SearchStrategy>,
}

impl AiPlayer {
    /// Creates a new computer player.
    pub fn new(strategy: Box<dyn SearchStrategy>) -> Self {
        Self { strategy }
    }
}

impl Contestant for AiPlayer {
    fn take_turn(&mut self, board: &BoardState, out: &mut dyn Write) -> Result<BoardState> {
        debug!(ai = %self.strategy.name(), "AI making move");
        let next = self.strategy.search(board)?;
        writeln!(out)?;
        write!(out, "{}", next)?;
        Ok(next)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::{MinimaxStrategy, Player};

    #[test]
    fn test_ai_prints_board_after_move() {
        let mut ai = AiPlayer::new(Box::new(MinimaxStrategy::new(Player::X, 1)));
        let mut out = Vec::new();
        let next = ai.take_turn(&BoardState::new(), &mut out).unwrap();

        assert_eq!(next.move_count(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n -  -  - \n -  -  - \n X  -  - \n"
        );
        assert!(!ai.is_human());
    }
}
