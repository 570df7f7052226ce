//! Depth-limited minimax over a fully expanded game tree.
//!
//! Leaves score +1 when the perspective player has completed a line, -1
//! when the opponent has, and 0 otherwise. A position that is still
//! undecided when the depth bound is hit also scores 0, the same as a
//! real draw.

use super::SearchStrategy;
use crate::board::BoardState;
use crate::error::GameError;
use crate::tree::{Node, build_tree};
use crate::types::{Outcome, Player};
use tracing::{debug, info, instrument};

/// Score of a position won by the perspective player.
pub const WIN_SCORE: i32 = 1;
/// Score of a position won by the opponent.
pub const LOSS_SCORE: i32 = -1;
/// Score of a drawn or cut-off position.
pub const NEUTRAL_SCORE: i32 = 0;

/// Minimax search on behalf of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    player: Player,
    max_depth: usize,
}

impl MinimaxStrategy {
    /// Creates a strategy maximizing for `player`, looking `max_depth`
    /// plies ahead of the searched position.
    ///
    /// A `max_depth` of 0 never expands the root, so [`SearchStrategy::search`]
    /// returns [`GameError::NoFeasibleMoves`] for every position.
    pub fn new(player: Player, max_depth: usize) -> Self {
        Self { player, max_depth }
    }

    /// Returns the perspective player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the search depth in plies.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Scores a leaf position.
    fn leaf_score(&self, board: &BoardState) -> i32 {
        match board.outcome() {
            Outcome::Won(winner) if winner == self.player => WIN_SCORE,
            Outcome::Won(_) => LOSS_SCORE,
            Outcome::Draw | Outcome::InProgress => NEUTRAL_SCORE,
        }
    }

    /// Scores `node` by backward induction and records the score on it and
    /// on every descendant.
    ///
    /// The side to move maximizes when it is the perspective player and
    /// minimizes otherwise. Only a strictly better child replaces the
    /// running best, so ties go to the earliest move in row-major order.
    pub fn evaluate(&self, node: &mut Node) -> i32 {
        let score = if node.is_leaf() {
            self.leaf_score(node.board())
        } else {
            let maximizing = node.board().next_to_move() == self.player;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for child in node.children_mut() {
                let score = self.evaluate(child);
                if (maximizing && score > best) || (!maximizing && score < best) {
                    best = score;
                }
            }
            best
        };
        node.set_score(score);
        score
    }
}

impl SearchStrategy for MinimaxStrategy {
    fn name(&self) -> &str {
        "Minimax"
    }

    #[instrument(skip_all, fields(player = %self.player, depth = self.max_depth, move_count = board.move_count()))]
    fn search(&mut self, board: &BoardState) -> Result<BoardState, GameError> {
        let mut root = build_tree(board, self.max_depth);

        let mut best: Option<(usize, i32)> = None;
        for (index, child) in root.children_mut().iter_mut().enumerate() {
            let score = self.evaluate(child);
            debug!(mv = ?child.last_move(), score, "Child evaluated");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(GameError::NoFeasibleMoves)?;
        let nodes = root.node_count();
        let chosen = root.into_children().swap_remove(index);
        info!(mv = ?chosen.last_move(), score, nodes, "Minimax move chosen");
        Ok(chosen.into_board())
    }
}
