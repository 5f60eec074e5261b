//! Rendering module.
//!
//! Turns game state into the text message a player sees, and draws that
//! message to a terminal for local play.
//!
//! - [`view`]: pure board + piece + score -> [`RenderedView`]
//! - [`renderer`]: crossterm renderer that edits the view in place

pub mod renderer;
pub mod view;

pub use reaction_tetris_core as core;
pub use reaction_tetris_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{render_view, score_title, RenderedView};
