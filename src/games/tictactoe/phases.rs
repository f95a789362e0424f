//! Round phases and outcomes.

use super::rules::WinPattern;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum RoundPhase {
    /// Waiting for the player to click a cell.
    #[default]
    AwaitingPlayerMove,
    /// The computer is "thinking"; its move is scheduled on a timer.
    ComputerThinking,
    /// The round is over and the board is frozen until the reset timer fires.
    RoundEnded,
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a line.
    Won {
        /// The side that won.
        winner: Mark,
        /// The completed line.
        pattern: WinPattern,
    },
    /// The board filled up with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { winner, .. } => write!(f, "{} wins", winner),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
