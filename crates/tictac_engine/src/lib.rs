//! Tic-tac-toe engine - board model and adversarial search
//!
//! # Architecture
//!
//! - **Board**: immutable [`BoardState`] snapshots with outcome detection
//! - **Moves**: [`feasible_moves`] enumerates empty cells of undecided boards
//! - **Tree**: [`build_tree`] expands positions to a bounded depth
//! - **Search**: [`SearchStrategy`] implemented by [`MinimaxStrategy`] and
//!   [`RandomStrategy`]
//!
//! # Example
//!
//! ```
//! use tictac_engine::{BoardState, MinimaxStrategy, Outcome, Player, SearchStrategy};
//!
//! let board = BoardState::new().apply_move(1, 1)?;
//! let mut ai = MinimaxStrategy::new(Player::O, 3);
//! let board = ai.search(&board)?;
//! assert_eq!(board.move_count(), 2);
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! # Ok::<(), tictac_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod moves;
mod rules;
mod search;
mod tree;
mod types;

pub use board::{BoardState, STANDARD_SIZE};
pub use error::{GameError, MoveRejection};
pub use moves::{Move, feasible_moves};
pub use rules::Line;
pub use search::{
    MinimaxStrategy, RandomStrategy, SearchStrategy, StrategyKind, build_strategy,
};
pub use tree::{Node, build_tree};
pub use types::{Cell, Outcome, Player};
