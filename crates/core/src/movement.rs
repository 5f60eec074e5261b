//! Collision and movement rules
//!
//! Every move follows the same pattern: build a candidate piece, check its
//! cells with [`is_valid_placement`], then commit or discard. Rotation is a
//! plain lookup into the next mask; there are no wall kicks.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Direction, PlayerMove, Position, MIN_PLACEMENT_ROW};

/// True iff every cell is on the board, below row 0, and empty.
///
/// Row 0 belongs to the spawn buffer but is never accepted as a target.
pub fn is_valid_placement(cells: &[Position], board: &Board) -> bool {
    cells.iter().all(|&(row, col)| {
        row >= MIN_PLACEMENT_ROW
            && row < board.height() as i8
            && col >= 0
            && col < board.width() as i8
            && board.is_empty_at(row, col)
    })
}

/// Check a whole piece against the board
pub fn fits(piece: &Piece, board: &Board) -> bool {
    is_valid_placement(&piece.occupied_cells(), board)
}

/// Shift sideways by `d_col` if the target is free
pub fn try_shift(piece: &mut Piece, d_col: i8, board: &Board) -> bool {
    let candidate = piece.translated(0, d_col);
    if fits(&candidate, board) {
        *piece = candidate;
        return true;
    }
    false
}

/// Rotate one step forward; a colliding orientation is rejected outright
pub fn try_rotate(piece: &mut Piece, board: &Board) -> bool {
    piece.rotate(Direction::Forward);
    if fits(piece, board) {
        return true;
    }
    piece.rotate(Direction::Backward);
    false
}

/// Move down one row if possible (gravity step)
pub fn try_descend(piece: &mut Piece, board: &Board) -> bool {
    let candidate = piece.translated(1, 0);
    if fits(&candidate, board) {
        *piece = candidate;
        return true;
    }
    false
}

/// Drop as far as possible and return the distance travelled
pub fn hard_drop(piece: &mut Piece, board: &Board) -> u32 {
    let mut distance = 0;
    while try_descend(piece, board) {
        distance += 1;
    }
    distance
}

/// Apply a player move to the piece.
///
/// Returns whether the piece changed. `Quit` is not a movement and leaves
/// the piece alone; the game loop handles it.
pub fn apply_move(piece: &mut Piece, mv: PlayerMove, board: &Board) -> bool {
    match mv {
        PlayerMove::ShiftLeft => try_shift(piece, -1, board),
        PlayerMove::ShiftRight => try_shift(piece, 1, board),
        PlayerMove::Rotate => try_rotate(piece, board),
        PlayerMove::HardDrop => hard_drop(piece, board) > 0,
        PlayerMove::Quit => false,
    }
}
