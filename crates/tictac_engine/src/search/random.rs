//! Uniform random play.

use super::SearchStrategy;
use crate::board::BoardState;
use crate::error::GameError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Picks a feasible move uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = ChaCha8Rng> {
    rng: R,
}

impl RandomStrategy<ChaCha8Rng> {
    /// Creates a reproducible strategy from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a strategy seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SearchStrategy for RandomStrategy<R> {
    fn name(&self) -> &str {
        "Random"
    }

    #[instrument(skip_all, fields(move_count = board.move_count()))]
    fn search(&mut self, board: &BoardState) -> Result<BoardState, GameError> {
        let moves = board.feasible_moves();
        if moves.is_empty() {
            return Err(GameError::NoFeasibleMoves);
        }

        let mv = moves[self.rng.gen_range(0..moves.len())];
        debug!(%mv, "Random move chosen");
        board.play(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    #[test]
    fn test_same_seed_same_move() {
        let board = BoardState::new();
        let a = RandomStrategy::seeded(42).search(&board).unwrap();
        let b = RandomStrategy::seeded(42).search(&board).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_plays_only_empty_cell() {
        let x = Cell::Occupied(Player::X);
        let o = Cell::Occupied(Player::O);
        let board = BoardState::from_rows(vec![
            vec![x, o, x],
            vec![x, o, o],
            vec![o, x, Cell::Empty],
        ])
        .unwrap();
        let next = RandomStrategy::seeded(3).search(&board).unwrap();
        assert_eq!(next.cell(2, 2), Some(x));
        assert_eq!(next.move_count(), 9);
    }

    #[test]
    fn test_decided_board_fails() {
        let mut board = BoardState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            board = board.apply_move(row, col).unwrap();
        }
        let result = RandomStrategy::seeded(0).search(&board);
        assert_eq!(result, Err(GameError::NoFeasibleMoves));
    }
}
