//! Search strategies that pick the next move for an AI player.

mod minimax;
mod random;

pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::board::BoardState;
use crate::error::GameError;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for algorithms that choose a move.
pub trait SearchStrategy {
    /// Returns the strategy's display name.
    fn name(&self) -> &str;

    /// Returns the board after the chosen move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoFeasibleMoves`] when `board` is already
    /// decided.
    fn search(&mut self, board: &BoardState) -> Result<BoardState, GameError>;
}

/// Selectable strategy families.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Uniformly random feasible move.
    Random,
    /// Depth-limited minimax.
    #[default]
    Minimax,
}

/// Builds a boxed strategy playing `player`.
///
/// `depth` only applies to minimax; `seed` only to random play, which
/// draws from OS entropy when no seed is given.
#[instrument]
pub fn build_strategy(
    kind: StrategyKind,
    player: Player,
    depth: usize,
    seed: Option<u64>,
) -> Box<dyn SearchStrategy> {
    match kind {
        StrategyKind::Random => match seed {
            Some(seed) => Box::new(RandomStrategy::seeded(seed)),
            None => Box::new(RandomStrategy::from_entropy()),
        },
        StrategyKind::Minimax => Box::new(MinimaxStrategy::new(player, depth)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_parses() {
        assert_eq!("minimax".parse::<StrategyKind>().unwrap(), StrategyKind::Minimax);
        assert_eq!("Random".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!(StrategyKind::Random.to_string(), "random");
    }

    #[test]
    fn test_build_strategy_names() {
        let minimax = build_strategy(StrategyKind::Minimax, Player::O, 3, None);
        assert_eq!(minimax.name(), "Minimax");
        let random = build_strategy(StrategyKind::Random, Player::X, 3, Some(7));
        assert_eq!(random.name(), "Random");
    }

    #[test]
    fn test_boxed_strategy_moves() {
        let mut strategy = build_strategy(StrategyKind::Random, Player::X, 0, Some(1));
        let next = strategy.search(&BoardState::new()).unwrap();
        assert_eq!(next.move_count(), 1);
    }
}
