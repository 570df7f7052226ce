//! Game rules for tic-tac-toe.
//!
//! Pure functions over a row-major grid of cells. Rules are separated
//! from board storage so they can run on grids that were never built
//! through normal play.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{Line, check_winner};

use crate::types::{Cell, Outcome};
use tracing::instrument;

/// Fewest moves that can complete a line on a grid of the given size.
pub fn min_moves_to_decide(size: usize) -> usize {
    (2 * size).saturating_sub(1)
}

/// Scans the grid from scratch and classifies it.
///
/// A completed line wins; otherwise a grid holding `size * size` marks is
/// a draw. `move_count` must match the number of marks in `cells`.
#[instrument(level = "trace", skip(cells))]
pub fn determine_outcome(cells: &[Cell], size: usize, move_count: usize) -> Outcome {
    if let Some(winner) = check_winner(cells, size) {
        return Outcome::Won(winner);
    }
    if is_full(move_count, size) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
