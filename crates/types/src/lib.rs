//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering, session loop, wire protocol).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21), the top 3 rows are a hidden spawn buffer
//! - **Spawn anchor**: row 0, column 4
//!
//! Coordinates are always `(row, col)` with row 0 at the top.
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Gravity/render interval of the session loop |
//! | `POINTS_PER_ROW` | 10 | Score per cleared row, no multi-line bonus |
//!
//! # Examples
//!
//! ```
//! use reaction_tetris_types::{PieceKind, PlayerMove, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::T.symbol(), "🟦");
//! assert_eq!(PlayerMove::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells, hidden buffer rows included (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Rows at the top of the board that are never rendered
pub const HIDDEN_ROWS: u8 = 3;

/// Smallest row index a piece cell may occupy.
///
/// Row 0 is part of the spawn buffer but is never a legal target.
pub const MIN_PLACEMENT_ROW: i8 = 1;

/// Anchor row of a freshly spawned piece
pub const SPAWN_ROW: i8 = 0;

/// Anchor column of a freshly spawned piece
pub const SPAWN_COL: i8 = 4;

/// Session loop interval in milliseconds (one tick per second)
pub const TICK_MS: u64 = 1000;

/// Score awarded per cleared row
pub const POINTS_PER_ROW: u32 = 10;

/// Symbol drawn for an empty board cell
pub const EMPTY_SYMBOL: &str = "⬛";

/// The seven piece kinds
///
/// Each kind carries the symbol used to draw its cells:
/// - **J**: green square
/// - **L**: orange square
/// - **T**: blue square
/// - **Z**: purple square
/// - **S**: yellow square
/// - **I**: red square, the long piece
/// - **O**: brown square, the 2x2 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    J,
    L,
    T,
    Z,
    S,
    I,
    O,
}

impl PieceKind {
    /// Every kind, in catalog order. Uniform draws index into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::O,
    ];

    /// Symbol used to draw cells occupied by this kind
    pub fn symbol(&self) -> &'static str {
        match self {
            PieceKind::J => "🟩",
            PieceKind::L => "🟧",
            PieceKind::T => "🟦",
            PieceKind::Z => "🟪",
            PieceKind::S => "🟨",
            PieceKind::I => "🟥",
            PieceKind::O => "🟫",
        }
    }
}

/// Step through a shape's rotation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next mask in catalog order (what the rotate move does)
    Forward,
    /// Previous mask in catalog order (used to revert a rejected rotation)
    Backward,
}

/// Moves a player can queue for a session
///
/// Each move maps to one reaction symbol on the game message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerMove {
    /// Move piece one column left
    ShiftLeft,
    /// Move piece one column right
    ShiftRight,
    /// Advance to the next rotation mask
    Rotate,
    /// Drop piece to the lowest valid row
    HardDrop,
    /// End the session
    Quit,
}

impl PlayerMove {
    /// Every move, in the order the reaction buttons are offered.
    pub const ALL: [PlayerMove; 5] = [
        PlayerMove::Rotate,
        PlayerMove::HardDrop,
        PlayerMove::ShiftLeft,
        PlayerMove::ShiftRight,
        PlayerMove::Quit,
    ];

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerMove::ShiftLeft => "shiftLeft",
            PlayerMove::ShiftRight => "shiftRight",
            PlayerMove::Rotate => "rotate",
            PlayerMove::HardDrop => "hardDrop",
            PlayerMove::Quit => "quit",
        }
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The player sent the quit move
    Quit,
    /// A freshly spawned piece collided with the stack
    StackOut,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Quit => "quit",
            GameOverReason::StackOut => "stack_out",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by the specified piece kind
pub type Cell = Option<PieceKind>;

/// Absolute board coordinate `(row, col)`
pub type Position = (i8, i8);
