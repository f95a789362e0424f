//! Game error types.

use crate::collaborators::Cue;
use crate::games::tictactoe::Position;

/// Errors raised by the rules engine and the collaborator layer.
///
/// Only `CellOccupied` and `OutOfTurnAction` occur during normal play, and
/// the turn controller turns both into user-facing notices instead of
/// returning them. `InvalidPosition` is a programming error at the input
/// surface; `PlaybackFailure` is logged and swallowed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A raw board index outside 0-8.
    #[display("Position {} is outside the board (0-8)", _0)]
    InvalidPosition(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The player acted while it was not their turn.
    #[display("It's not the player's turn")]
    OutOfTurnAction,

    /// An audio cue could not be played.
    #[display("Failed to play {} cue: {}", cue, reason)]
    PlaybackFailure {
        /// The cue that failed.
        cue: Cue,
        /// Why playback failed.
        reason: String,
    },
}

impl std::error::Error for GameError {}
