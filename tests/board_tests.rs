//! Board tests

use reaction_tetris::core::Board;
use reaction_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(None), "({}, {}) should be empty", row, col);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Some(PieceKind::T)));
    assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(10, 5));

    assert!(board.set(10, 5, None));
    assert!(board.is_empty_at(10, 5));

    assert!(!board.set(BOARD_HEIGHT as i8, 0, Some(PieceKind::I)));
    assert!(!board.set(0, -1, Some(PieceKind::I)));
}

#[test]
fn test_out_of_bounds_is_not_empty() {
    let board = Board::new();
    assert!(!board.is_empty_at(-1, 3));
    assert!(!board.is_empty_at(3, BOARD_WIDTH as i8));
}

#[test]
fn test_clear_with_no_full_rows_changes_nothing() {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH as i8 - 1 {
        board.set(21, col, Some(PieceKind::L));
    }
    board.set(15, 3, Some(PieceKind::Z));
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_single_full_row_shifts_down_and_empties_top() {
    let mut board = Board::new();
    board.set(0, 2, Some(PieceKind::J));
    board.set(20, 7, Some(PieceKind::Z));
    board.fill_row(21, PieceKind::I);

    assert_eq!(board.clear_full_rows(), 1);

    // Everything above the cleared row moved down by one
    assert_eq!(board.get(21, 7), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(1, 2), Some(Some(PieceKind::J)));
    assert_eq!(board.filled_count(), 2);
    assert!(board.row(0).unwrap().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::new();
    board.fill_row(21, PieceKind::I);
    board.set(20, 0, Some(PieceKind::S));
    board.fill_row(19, PieceKind::I);
    board.set(18, 9, Some(PieceKind::T));

    assert_eq!(board.clear_full_rows(), 2);

    assert_eq!(board.get(21, 0), Some(Some(PieceKind::S)));
    assert_eq!(board.get(20, 9), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 2);
    for row in 0..20 {
        assert!(!board.is_row_full(row));
    }
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for row in 0..BOARD_HEIGHT as i8 {
        board.fill_row(row, PieceKind::O);
    }
    assert_eq!(board.clear_full_rows(), BOARD_HEIGHT as usize);
    assert_eq!(board.filled_count(), 0);
}
