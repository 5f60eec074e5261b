//! Piece module - a placed, movable piece instance
//!
//! A `Piece` is a plain `Copy` value: catalog kind, rotation index and the
//! anchor `(row, col)` where the top-left corner of its mask sits on the
//! board. Moving or rotating a piece never checks the board; callers test
//! the candidate with [`crate::movement::is_valid_placement`] first.

use arrayvec::ArrayVec;

use crate::pieces::{shape, Mask, Shape};
use crate::types::{Direction, PieceKind, Position, SPAWN_COL, SPAWN_ROW};

/// Largest mask is 4x4
pub const MAX_MASK_CELLS: usize = 16;

/// Absolute cells covered by a piece (stack-only)
pub type CellList = ArrayVec<Position, MAX_MASK_CELLS>;

/// Active piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor in its first orientation
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, 0, SPAWN_ROW, SPAWN_COL)
    }

    pub fn at(kind: PieceKind, rotation: usize, row: i8, col: i8) -> Self {
        Self {
            kind,
            rotation: rotation % shape(kind).rotation_count(),
            row,
            col,
        }
    }

    pub fn shape(&self) -> &'static Shape {
        shape(self.kind)
    }

    /// Mask for the current rotation
    pub fn mask(&self) -> Mask {
        self.shape().mask(self.rotation)
    }

    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }

    /// Board cells covered by the current mask, translated by the anchor
    pub fn occupied_cells(&self) -> CellList {
        let mut cells = CellList::new();
        for (r, mask_row) in self.mask().iter().enumerate() {
            for (c, &v) in mask_row.iter().enumerate() {
                if v != 0 {
                    cells.push((self.row + r as i8, self.col + c as i8));
                }
            }
        }
        cells
    }

    /// Shift the anchor unconditionally
    pub fn translate(&mut self, d_row: i8, d_col: i8) {
        self.row += d_row;
        self.col += d_col;
    }

    /// Copy of this piece shifted by `(d_row, d_col)`
    pub fn translated(&self, d_row: i8, d_col: i8) -> Self {
        let mut moved = *self;
        moved.translate(d_row, d_col);
        moved
    }

    /// Step the rotation index one state, wrapping around the cycle
    pub fn rotate(&mut self, direction: Direction) {
        let count = self.shape().rotation_count();
        self.rotation = match direction {
            Direction::Forward => (self.rotation + 1) % count,
            Direction::Backward => (self.rotation + count - 1) % count,
        };
    }

    /// Copy of this piece rotated one step
    pub fn rotated(&self, direction: Direction) -> Self {
        let mut turned = *self;
        turned.rotate(direction);
        turned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::mask_cell_count;

    #[test]
    fn occupied_cells_match_mask_count_for_every_rotation() {
        for kind in PieceKind::ALL {
            let count = shape(kind).rotation_count();
            for rotation in 0..count {
                let piece = Piece::at(kind, rotation, 5, 2);
                let cells = piece.occupied_cells();
                assert_eq!(cells.len(), mask_cell_count(piece.mask()));
            }
        }
    }

    #[test]
    fn occupied_cells_are_translated_by_anchor() {
        // J first mask: 000 / 111 / 001
        let piece = Piece::at(PieceKind::J, 0, 10, 3);
        let cells = piece.occupied_cells();
        assert_eq!(cells.as_slice(), &[(11, 3), (11, 4), (11, 5), (12, 5)]);
    }

    #[test]
    fn full_rotation_cycle_returns_to_start() {
        for kind in PieceKind::ALL {
            let start = Piece::at(kind, 0, 6, 4);
            let mut piece = start;
            for _ in 0..piece.shape().rotation_count() {
                piece.rotate(Direction::Forward);
            }
            assert_eq!(piece, start);
        }
    }

    #[test]
    fn backward_undoes_forward() {
        let start = Piece::at(PieceKind::T, 0, 6, 4);
        let back = start.rotated(Direction::Forward).rotated(Direction::Backward);
        assert_eq!(back, start);

        let wrapped = start.rotated(Direction::Backward);
        assert_eq!(wrapped.rotation, 3);
    }

    #[test]
    fn spawn_uses_fixed_anchor() {
        let piece = Piece::spawn(PieceKind::O);
        assert_eq!((piece.row, piece.col), (SPAWN_ROW, SPAWN_COL));
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn instances_do_not_share_rotation_state() {
        let mut a = Piece::spawn(PieceKind::L);
        let b = a;
        a.rotate(Direction::Forward);
        assert_eq!(b.rotation, 0);
        assert_eq!(Piece::spawn(PieceKind::L).rotation, 0);
    }
}
