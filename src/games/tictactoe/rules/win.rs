//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that win the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinPattern([Position; 3]);

/// All lines in scan priority: both diagonals (descending, then
/// ascending), the rows top to bottom, then the columns left to right.
///
/// Both win detection and the computer heuristic scan in this order, so it
/// decides which line is reported and which move is picked when several
/// qualify.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Diagonals
    WinPattern([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinPattern([Position::BottomLeft, Position::Center, Position::TopRight]),
    // Rows
    WinPattern([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinPattern([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinPattern([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinPattern([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinPattern([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinPattern([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
];

impl WinPattern {
    /// The three positions of this line.
    pub const fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let first = board.get_cell(a);
        if first != Cell::Empty && first == board.get_cell(b) && first == board.get_cell(c) {
            first.mark()
        } else {
            None
        }
    }

    /// Number of cells in this line holding `mark`.
    pub fn count(&self, board: &Board, mark: Mark) -> usize {
        self.0
            .iter()
            .filter(|pos| board.get_cell(**pos) == Cell::Occupied(mark))
            .count()
    }

    /// The cell that would complete this line for `mark`.
    ///
    /// Returns `Some` only when `mark` holds exactly two cells and the third
    /// is empty.
    pub fn completion_for(&self, board: &Board, mark: Mark) -> Option<Position> {
        if self.count(board, mark) != 2 {
            return None;
        }
        self.0.iter().copied().find(|pos| board.is_empty(*pos))
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line, in [`WIN_PATTERNS`] order, whose three cells
/// hold the same mark. `None` otherwise.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<WinPattern> {
    WIN_PATTERNS
        .iter()
        .copied()
        .find(|pattern| pattern.owner(board).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set_cell(*pos, *mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Player),
            (Position::TopCenter, Mark::Player),
            (Position::TopRight, Mark::Player),
        ]);
        let pattern = detect_winner(&board).unwrap();
        assert_eq!(
            pattern.positions(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert_eq!(pattern.owner(&board), Some(Mark::Player));
    }

    #[test]
    fn test_winner_ascending_diagonal() {
        let board = board_with(&[
            (Position::BottomLeft, Mark::Computer),
            (Position::Center, Mark::Computer),
            (Position::TopRight, Mark::Computer),
        ]);
        assert_eq!(detect_winner(&board), Some(WIN_PATTERNS[1]));
    }

    #[test]
    fn test_diagonal_reported_before_row() {
        // Top row and descending diagonal both complete; diagonals scan first.
        let board = board_with(&[
            (Position::TopLeft, Mark::Player),
            (Position::TopCenter, Mark::Player),
            (Position::TopRight, Mark::Player),
            (Position::Center, Mark::Player),
            (Position::BottomRight, Mark::Player),
        ]);
        assert_eq!(detect_winner(&board), Some(WIN_PATTERNS[0]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Player),
            (Position::TopCenter, Mark::Computer),
            (Position::TopRight, Mark::Player),
        ]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_completion_needs_two_and_a_gap() {
        let board = board_with(&[
            (Position::MiddleLeft, Mark::Computer),
            (Position::Center, Mark::Computer),
        ]);
        let row = WIN_PATTERNS[3];
        assert_eq!(row.completion_for(&board, Mark::Computer), Some(Position::MiddleRight));
        assert_eq!(row.completion_for(&board, Mark::Player), None);
    }
}
