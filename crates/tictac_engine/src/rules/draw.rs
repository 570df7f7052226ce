//! Draw detection logic.

use tracing::instrument;

/// Checks if every cell of a `size`×`size` grid holds a mark.
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace")]
pub fn is_full(move_count: usize, size: usize) -> bool {
    move_count == size * size
}
