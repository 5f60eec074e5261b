//! Game tick tests against the public API

use reaction_tetris::core::{fits, Board, GameState, GameStatus, Piece, PieceRng, TickOutcome};
use reaction_tetris::types::{GameOverReason, PieceKind, PlayerMove, BOARD_WIDTH};

/// Bottom row full except `gap`
fn board_with_gap(gap: i8) -> Board {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH as i8 {
        if col != gap {
            board.set(21, col, Some(PieceKind::O));
        }
    }
    board
}

#[test]
fn vertical_i_into_gap_clears_row_and_scores() {
    let board = board_with_gap(0);
    let start = Piece::at(PieceKind::I, 1, 5, 0);
    let mut state = GameState::with_setup(board, start, PieceRng::new(7));

    let outcome = state.tick(Some(PlayerMove::HardDrop));

    assert_eq!(outcome, TickOutcome::Running { locked: true, cleared: 1 });
    assert_eq!(state.score(), 10);
    assert_eq!(state.lines(), 1);

    // The three I cells above the cleared row settle into column 0
    for row in 19..22 {
        assert_eq!(state.board().get(row, 0), Some(Some(PieceKind::I)));
    }
    assert_eq!(state.board().filled_count(), 3);
    assert!(fits(state.active(), state.board()));
}

#[test]
fn blocked_rotation_leaves_piece_unchanged() {
    let mut board = Board::new();
    // I horizontal at row 10 would need (10..14, col 4) to stand up
    board.set(12, 4, Some(PieceKind::T));
    let start = Piece::at(PieceKind::I, 0, 10, 4);
    let mut state = GameState::with_setup(board, start, PieceRng::new(1));

    let before = *state.active();
    assert!(!state.apply_move(PlayerMove::Rotate));
    assert_eq!(*state.active(), before);
}

#[test]
fn shift_into_wall_is_ignored() {
    let start = Piece::at(PieceKind::O, 0, 5, -1);
    let mut state = GameState::with_setup(Board::new(), start, PieceRng::new(1));
    assert!(fits(state.active(), state.board()));

    assert!(!state.apply_move(PlayerMove::ShiftLeft));
    assert_eq!(state.active().col, -1);
    assert!(state.apply_move(PlayerMove::ShiftRight));
    assert_eq!(state.active().col, 0);
}

#[test]
fn stack_out_ends_game_before_clearing() {
    let mut board = Board::new();
    for row in 1..4 {
        for col in 3..8 {
            board.set(row, col, Some(PieceKind::T));
        }
    }
    // Full bottom row that must survive the final tick
    board.fill_row(21, PieceKind::S);
    let start = Piece::at(PieceKind::O, 0, 18, 0);
    let mut state = GameState::with_setup(board, start, PieceRng::new(3));

    // O sits on the full row; it cannot descend
    let outcome = state.tick(None);

    assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::StackOut));
    assert_eq!(state.status(), GameStatus::Over(GameOverReason::StackOut));
    assert!(state.board().is_row_full(21));
    assert_eq!(state.score(), 0);
}

#[test]
fn game_ends_eventually_without_input() {
    let mut state = GameState::new(2024);
    let mut ticks = 0;
    while let TickOutcome::Running { .. } = state.tick(None) {
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }
    assert_eq!(state.status(), GameStatus::Over(GameOverReason::StackOut));
    assert!(state.pieces_locked() > 0);
}

#[test]
fn same_seed_same_game() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    for _ in 0..200 {
        assert_eq!(a.tick(Some(PlayerMove::HardDrop)), b.tick(Some(PlayerMove::HardDrop)));
    }
    assert_eq!(a.board(), b.board());
}
