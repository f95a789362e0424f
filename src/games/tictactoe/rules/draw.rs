//! Tie detection logic for tic-tac-toe.

use super::super::Board;
use super::win::detect_winner;
use tracing::instrument;

/// Checks if the round ended in a tie.
///
/// A tie needs a full board and no completed line; a full board with a
/// line is a win.
#[instrument(skip(board))]
pub fn detect_tie(board: &Board) -> bool {
    board.is_full() && detect_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    fn fill(board: &mut Board, layout: [Mark; 9]) {
        for (pos, mark) in Position::ALL.into_iter().zip(layout) {
            board.set_cell(pos, mark).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_tie() {
        assert!(!detect_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let mut board = Board::new();
        board.set_cell(Position::Center, Mark::Player).unwrap();
        assert!(!detect_tie(&board));
    }

    #[test]
    fn test_tie_detection() {
        use Mark::{Computer as O, Player as X};
        // X O X / O X X / O X O
        let mut board = Board::new();
        fill(&mut board, [X, O, X, O, X, X, O, X, O]);
        assert!(detect_winner(&board).is_none());
        assert!(detect_tie(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        use Mark::{Computer as O, Player as X};
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);
        assert!(board.is_full());
        assert!(detect_winner(&board).is_some());
        assert!(!detect_tie(&board));
    }
}
