//! Reaction Tetris (workspace facade crate).
//!
//! Re-exports `reaction_tetris::{core,engine,adapter,term,input,types}` so binaries, tests and
//! benches see one API while the implementation lives in dedicated crates under `crates/`.

pub use reaction_tetris_adapter as adapter;
pub use reaction_tetris_core as core;
pub use reaction_tetris_engine as engine;
pub use reaction_tetris_input as input;
pub use reaction_tetris_term as term;
pub use reaction_tetris_types as types;
