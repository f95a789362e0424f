//! Tic-tac-toe against a computer opponent.

pub mod heuristic;
mod phases;
mod position;
pub mod round;
pub mod rules;
pub mod taunts;
mod types;

pub use heuristic::select_computer_move;
pub use phases::{Outcome, RoundPhase};
pub use position::Position;
pub use round::{
    Effect, Event, GameState, RoundId, ScheduledTask, Step, TimerFired, TimerKind, start_round,
    step,
};
pub use rules::{WIN_PATTERNS, WinPattern, detect_tie, detect_winner};
pub use types::{Board, Cell, Mark, Score};
