//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state for one Tetris session.
//! It has **no dependencies** on rendering, networking, timers, or I/O:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is a plain function over a `Board` and a `Piece`
//! - **Allocation-free**: occupied cells live in an `ArrayVec` on the stack
//!
//! # Module Structure
//!
//! - [`pieces`]: the static catalog of seven shapes and their rotation masks
//! - [`piece`]: a piece instance (kind, rotation index, anchor)
//! - [`board`]: 22x10 grid with locking and full-row clearing
//! - [`movement`]: placement validity and the shift/rotate/drop/gravity moves
//! - [`rng`]: uniform seeded piece draws
//! - [`scoring`]: points per cleared row
//! - [`game_state`]: the per-tick state machine
//!
//! # Game Rules
//!
//! - **Uniform draws**: every spawn picks one of seven shapes at random, no bag
//! - **Fixed rotation**: the next mask or nothing, no wall kicks
//! - **Instant lock**: a piece locks on the first tick it cannot fall
//! - **Flat scoring**: 10 points per cleared row
//!
//! # Example
//!
//! ```
//! use reaction_tetris_core::{GameState, TickOutcome};
//! use reaction_tetris_types::PlayerMove;
//!
//! let mut game = GameState::new(12345);
//!
//! game.tick(Some(PlayerMove::ShiftLeft));
//! let outcome = game.tick(Some(PlayerMove::HardDrop));
//!
//! // Hard drop lands the piece; gravity on the same tick locks it
//! assert!(matches!(outcome, TickOutcome::Running { locked: true, .. }));
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod movement;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use reaction_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, GameStatus, TickOutcome};
pub use movement::{apply_move, fits, hard_drop, is_valid_placement};
pub use piece::{CellList, Piece};
pub use pieces::{shape, Mask, Shape};
pub use rng::{PieceRng, SimpleRng};
pub use scoring::line_clear_score;
