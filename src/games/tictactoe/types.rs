//! Core domain types for tic-tac-toe.

use super::phases::Outcome;
use super::position::Position;
use crate::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Owner of a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The human player (drawn as X).
    Player,
    /// The computer opponent (drawn as O).
    Computer,
}

impl Mark {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Symbol drawn for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get_cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] for indices outside 0-8.
    pub fn cell_at(&self, index: usize) -> Result<Cell, GameError> {
        Position::from_index(index).map(|pos| self.get_cell(pos))
    }

    /// Writes a mark into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOccupied`] if the cell already holds a mark;
    /// the board is left untouched.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        debug!(position = %pos, %mark, "Setting cell");
        self.cells[pos.to_index()] = Cell::Occupied(mark);
        Ok(())
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get_cell(pos) == Cell::Empty
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Returns all empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (index, cell) in self.cells.iter().enumerate() {
            match cell.mark() {
                Some(mark) => result.push(mark.symbol()),
                None => result.push_str(&(index + 1).to_string()),
            }
            match index % 3 {
                2 if index < 8 => result.push_str("\n-+-+-\n"),
                2 => {}
                _ => result.push('|'),
            }
        }
        result
    }
}

/// Running tally of finished rounds.
///
/// Serializes as the triple `[player_wins, computer_wins, ties]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct Score {
    /// Rounds won by the player.
    #[getter(copy)]
    player_wins: u32,
    /// Rounds won by the computer.
    #[getter(copy)]
    computer_wins: u32,
    /// Rounds ending in a tie.
    #[getter(copy)]
    ties: u32,
}

impl Score {
    /// Creates a score from its three counters.
    pub fn new(player_wins: u32, computer_wins: u32, ties: u32) -> Self {
        Self {
            player_wins,
            computer_wins,
            ties,
        }
    }

    /// Returns the score with the outcome of one more round counted.
    #[instrument]
    pub fn record(self, outcome: &Outcome) -> Self {
        let mut next = self;
        match outcome.winner() {
            Some(Mark::Player) => next.player_wins = next.player_wins.saturating_add(1),
            Some(Mark::Computer) => next.computer_wins = next.computer_wins.saturating_add(1),
            None => next.ties = next.ties.saturating_add(1),
        }
        next
    }

    /// Total number of rounds counted.
    pub fn rounds(&self) -> u64 {
        u64::from(self.player_wins) + u64::from(self.computer_wins) + u64::from(self.ties)
    }
}

impl From<[u32; 3]> for Score {
    fn from([player_wins, computer_wins, ties]: [u32; 3]) -> Self {
        Self::new(player_wins, computer_wins, ties)
    }
}

impl From<Score> for [u32; 3] {
    fn from(score: Score) -> Self {
        [score.player_wins, score.computer_wins, score.ties]
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player {} / computer {} / ties {}",
            self.player_wins, self.computer_wins, self.ties
        )
    }
}
