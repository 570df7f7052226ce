//! Depth-limited game tree expansion.
//!
//! The tree is a strict out-tree: every [`Node`] owns its children and is
//! dropped with them once a search returns. Expansion is full-width with
//! no pruning, ordering, or memoization of repeated positions, so its
//! cost grows as branching^depth.

use crate::board::BoardState;
use crate::moves::Move;
use tracing::{debug, instrument};

/// A position reached during search.
#[derive(Debug, Clone)]
pub struct Node {
    board: BoardState,
    last_move: Option<Move>,
    children: Vec<Node>,
    depth: usize,
    score: Option<i32>,
}

impl Node {
    fn expand(board: BoardState, last_move: Option<Move>, depth: usize, max_depth: usize) -> Self {
        let children = if depth < max_depth {
            board
                .feasible_moves()
                .into_iter()
                .filter_map(|mv| match board.play(mv) {
                    Ok(child) => Some(Node::expand(child, Some(mv), depth + 1, max_depth)),
                    Err(e) => {
                        // Enumerated moves always target empty in-range cells.
                        unreachable!("feasible move {} rejected: {}", mv, e)
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            board,
            last_move,
            children,
            depth,
            score: None,
        }
    }

    /// Returns the position at this node.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the move that produced this node (`None` at the root).
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the child nodes, one per feasible move in row-major order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns mutable access to the children for evaluation.
    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Returns the depth in plies from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the score assigned during evaluation, if any.
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = Some(score);
    }

    /// Checks if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts this node and all of its descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Consumes the node, returning its children.
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Consumes the node, returning its position.
    pub fn into_board(self) -> BoardState {
        self.board
    }
}

/// Expands every position reachable from `root` within `max_depth` plies.
///
/// The root sits at depth 0. A node at `max_depth`, or one whose game is
/// decided, is a leaf.
#[instrument(skip(root), fields(move_count = root.move_count()))]
pub fn build_tree(root: &BoardState, max_depth: usize) -> Node {
    let node = Node::expand(root.clone(), None, 0, max_depth);
    debug!(nodes = node.node_count(), "Game tree built");
    node
}
