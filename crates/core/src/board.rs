//! Board module - manages the game grid
//!
//! The board is a 22x10 grid where each cell is empty or holds the kind of the
//! piece that locked there. The top 3 rows are a hidden spawn buffer.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..21 (top to bottom) and col ranges
//! 0..9 (left to right).
//!
//! The board only changes in two ways: a piece locks into it, or full rows
//! are cleared. Movement never writes here.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 22 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// One row as a slice, `None` if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = row * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Fill every column of a row with one kind
    pub fn fill_row(&mut self, row: i8, kind: PieceKind) {
        for col in 0..BOARD_WIDTH as i8 {
            self.set(row, col, Some(kind));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and settle at the bottom; the
    /// same number of empty rows appear at the top. Two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0usize;
        let mut write_row = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty rows take the place of the removed ones at the top
        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared
    }

    /// Write a piece's cells into the board.
    ///
    /// Cells outside the board are skipped; callers only lock pieces that
    /// passed placement validation.
    pub fn lock_piece(&mut self, piece: &Piece) {
        for (row, col) in piece.occupied_cells() {
            self.set(row, col, Some(piece.kind));
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(21, 9), Some(219));
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(22, 0), None);
        assert_eq!(Board::index(-1, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(10, 5, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn clear_keeps_partial_rows_in_order() {
        let mut board = Board::new();
        board.set(18, 0, Some(PieceKind::J));
        board.fill_row(19, PieceKind::I);
        board.set(20, 1, Some(PieceKind::S));
        board.fill_row(21, PieceKind::O);

        assert_eq!(board.clear_full_rows(), 2);

        assert_eq!(board.get(20, 0), Some(Some(PieceKind::J)));
        assert_eq!(board.get(21, 1), Some(Some(PieceKind::S)));
        assert_eq!(board.filled_count(), 2);
        assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
        assert!(board.row(1).unwrap().iter().all(|c| c.is_none()));
    }

    #[test]
    fn lock_writes_piece_kind() {
        let mut board = Board::new();
        let piece = Piece::at(PieceKind::O, 0, 19, 0);
        board.lock_piece(&piece);

        // O mask occupies mask rows 1-2, cols 1-2
        assert_eq!(board.get(20, 1), Some(Some(PieceKind::O)));
        assert_eq!(board.get(20, 2), Some(Some(PieceKind::O)));
        assert_eq!(board.get(21, 1), Some(Some(PieceKind::O)));
        assert_eq!(board.get(21, 2), Some(Some(PieceKind::O)));
        assert_eq!(board.filled_count(), 4);
    }
}
