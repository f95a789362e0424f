//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! board storage so the round transitions and the computer heuristic can
//! share them.

pub mod draw;
pub mod win;

pub use draw::detect_tie;
pub use win::{WIN_PATTERNS, WinPattern, detect_winner};
