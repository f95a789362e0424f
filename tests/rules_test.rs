//! Win and tie detection over whole games.

use strictly_versus::{Board, Mark, Position, WIN_PATTERNS, detect_tie, detect_winner};

fn board_from(marks: [Option<Mark>; 9]) -> Board {
    let mut board = Board::new();
    for (pos, mark) in Position::ALL.into_iter().zip(marks) {
        if let Some(mark) = mark {
            board.set_cell(pos, mark).unwrap();
        }
    }
    board
}

/// Plays every legal alternating game to its end and checks each terminal board.
fn walk(board: &Board, to_move: Mark, finished: &mut usize) {
    if let Some(pattern) = detect_winner(board) {
        let owners: Vec<Mark> = WIN_PATTERNS
            .iter()
            .filter_map(|pattern| pattern.owner(board))
            .collect();
        assert!(
            owners.iter().all(|mark| *mark == owners[0]),
            "both sides completed a line:\n{}",
            board.display()
        );
        assert_eq!(pattern.owner(board), Some(to_move.opponent()));
        assert!(!detect_tie(board));
        *finished += 1;
        return;
    }
    if board.is_full() {
        assert!(detect_tie(board));
        *finished += 1;
        return;
    }
    for pos in board.empty_positions() {
        let mut next = board.clone();
        next.set_cell(pos, to_move).unwrap();
        walk(&next, to_move.opponent(), finished);
    }
}

#[test]
fn test_every_legal_game_has_one_winner_at_most() {
    let mut finished = 0;
    walk(&Board::new(), Mark::Player, &mut finished);
    assert_eq!(finished, 255_168);
}

#[test]
fn test_full_board_without_line_is_tie() {
    use Mark::{Computer as O, Player as X};
    let board = board_from([
        Some(X),
        Some(O),
        Some(X),
        Some(X),
        Some(O),
        Some(O),
        Some(O),
        Some(X),
        Some(X),
    ]);
    assert!(detect_winner(&board).is_none());
    assert!(detect_tie(&board));
}

#[test]
fn test_partial_board_is_neither() {
    let board = board_from([
        Some(Mark::Player),
        None,
        None,
        None,
        Some(Mark::Computer),
        None,
        None,
        None,
        None,
    ]);
    assert!(detect_winner(&board).is_none());
    assert!(!detect_tie(&board));
}

#[test]
fn test_diagonals_checked_before_rows() {
    use Mark::Player as X;
    // Top row and main diagonal both complete; the diagonal is reported.
    let board = board_from([
        Some(X),
        Some(X),
        Some(X),
        None,
        Some(X),
        None,
        None,
        None,
        Some(X),
    ]);
    let pattern = detect_winner(&board).unwrap();
    assert_eq!(
        pattern.positions(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
}
