//! Strictly Versus - tic-tac-toe against a computer opponent
//!
//! A human plays rounds of tic-tac-toe against a computer that either plays
//! at random or follows a win-then-block heuristic.
//!
//! # Architecture
//!
//! - **Games**: board, rules, heuristic, and pure round transitions
//! - **Controller**: single owner of the game state, dispatching effects
//! - **Collaborators**: traits the controller draws, speaks, and stores through
//! - **Session / Simulate**: event loops on the tokio clock or a virtual one
//!
//! # Example
//!
//! ```
//! use strictly_versus::{GameConfig, MemoryScoreStore, RecordingFrontend, TurnController};
//!
//! let config = GameConfig::default().with_seed(7);
//! let mut controller =
//!     TurnController::from_config(RecordingFrontend::new(), MemoryScoreStore::default(), &config);
//! let timers = controller.start();
//! assert_eq!(controller.state().board().empty_positions().len(), 9);
//! # let _ = timers;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod collaborators;
mod config;
mod controller;
mod error;
mod games;
mod persistence;
mod session;
mod simulate;

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, RoundSettings};

// Crate-level exports - Collaborators
pub use collaborators::{
    AudioCue, Cue, Frontend, Message, Notifier, RecordingFrontend, Renderer, ScorePersistence,
    Severity, TracingFrontend,
};

// Crate-level exports - Persistence
pub use persistence::{FileScoreStore, MemoryScoreStore, ScoreError, decode_score, encode_score};

// Crate-level exports - Controller and drivers
pub use controller::{TimerCommand, TurnController};
pub use session::Session;
pub use simulate::{SimulationError, SimulationReport, VirtualClock, drive, run_simulation};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Effect, Event, GameState, Mark, Outcome, Position, RoundId, RoundPhase,
    ScheduledTask, Score, Step, TimerFired, TimerKind, WIN_PATTERNS, WinPattern, detect_tie,
    detect_winner, select_computer_move, start_round, step,
};

// Crate-level exports - Heuristic helpers
pub use games::tictactoe::heuristic::{completing_move, random_empty_cell};
pub use games::tictactoe::taunts::TAUNTS;
