//! View: maps a board, the active piece and the score into a text message.
//!
//! This module is pure (no I/O). The same `RenderedView` is sent over the
//! wire by the adapter and drawn to a terminal by [`crate::TerminalRenderer`].

use crate::core::{Board, Piece};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_SYMBOL, HIDDEN_ROWS};

/// A rendered game message: a header line and the visible grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub title: String,
    /// One line per visible row, terminated by `\n`
    pub body: String,
}

impl RenderedView {
    /// Visible grid lines, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

/// Header shown above the grid
pub fn score_title(score: u32) -> String {
    format!("TETRIS. Score: {}", score)
}

/// Render the board with `piece` overlaid.
///
/// Hidden buffer rows are dropped. Piece cells outside the visible area are
/// not drawn.
pub fn render_view(board: &Board, piece: &Piece, score: u32) -> RenderedView {
    let width = BOARD_WIDTH as usize;
    let mut grid: Vec<&'static str> = board
        .cells()
        .iter()
        .map(|cell| cell.map(|kind| kind.symbol()).unwrap_or(EMPTY_SYMBOL))
        .collect();

    for (row, col) in piece.occupied_cells() {
        if row >= 0 && row < BOARD_HEIGHT as i8 && col >= 0 && col < BOARD_WIDTH as i8 {
            grid[row as usize * width + col as usize] = piece.symbol();
        }
    }

    let visible = &grid[HIDDEN_ROWS as usize * width..];
    let mut body = String::with_capacity(visible.len() * 4 + visible.len() / width);
    for row in visible.chunks_exact(width) {
        for symbol in row {
            body.push_str(symbol);
        }
        body.push('\n');
    }

    RenderedView {
        title: score_title(score),
        body,
    }
}
