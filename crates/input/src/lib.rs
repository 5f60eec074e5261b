//! Input module.
//!
//! Players steer a game by reacting to its message with one of five symbols.
//! This crate maps those symbols to [`crate::types::PlayerMove`] and maps
//! terminal keys onto the same symbols so local play goes through the exact
//! path remote reactions take.

pub mod map;

pub use reaction_tetris_types as types;

pub use map::{control_symbols, key_to_symbol, move_symbol, should_abort, symbol_to_move};
