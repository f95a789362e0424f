//! Tests for tic-tac-toe position enum.

use strictly_versus::{Board, GameError, Mark, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0).unwrap(), Position::TopLeft);
    assert_eq!(Position::from_index(4).unwrap(), Position::Center);
    assert_eq!(Position::from_index(8).unwrap(), Position::BottomRight);
    assert!(matches!(
        Position::from_index(9),
        Err(GameError::InvalidPosition(9))
    ));
}

#[test]
fn test_all_positions_in_index_order() {
    for (index, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(Position::from_row_col(pos.row(), pos.col()).unwrap(), *pos);
    }
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9); // All positions valid on empty board
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set_cell(Position::TopLeft, Mark::Player).unwrap();
    board.set_cell(Position::Center, Mark::Computer).unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_occupied_cell_rejected() {
    let mut board = Board::new();
    board.set_cell(Position::Center, Mark::Player).unwrap();
    assert!(matches!(
        board.set_cell(Position::Center, Mark::Computer),
        Err(GameError::CellOccupied(Position::Center))
    ));
    assert_eq!(board.get_cell(Position::Center).mark(), Some(Mark::Player));
}
