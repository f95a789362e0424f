//! Move selection for the computer opponent.
//!
//! Smart mode completes its own two-in-a-row first, then blocks the
//! player's, and otherwise plays a random empty cell. Lines are checked one
//! at a time in [`WIN_PATTERNS`] order; there is no look-ahead, so double
//! threats go unblocked and forks are never set up.

use super::rules::WIN_PATTERNS;
use super::{Board, Mark, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks the computer's next move.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn select_computer_move<R: Rng + ?Sized>(
    board: &Board,
    smart: bool,
    rng: &mut R,
) -> Option<Position> {
    if smart {
        if let Some(pos) = completing_move(board, Mark::Computer) {
            debug!(position = %pos, "Taking winning move");
            return Some(pos);
        }
        if let Some(pos) = completing_move(board, Mark::Player) {
            debug!(position = %pos, "Blocking player");
            return Some(pos);
        }
    }

    let pos = random_empty_cell(board, rng)?;
    debug!(position = %pos, "Playing random cell");
    Some(pos)
}

/// First cell, in pattern priority, that completes a line for `mark`.
pub fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    WIN_PATTERNS
        .iter()
        .find_map(|pattern| pattern.completion_for(board, mark))
}

/// Uniformly random empty cell.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.gen_range(0..empty.len())])
}
