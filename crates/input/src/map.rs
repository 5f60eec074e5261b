//! Mapping between reaction symbols, terminal keys and player moves.

use crate::types::PlayerMove;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Emoji variation selector; chat clients send arrows with or without it.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Reaction symbol offered for a move
pub fn move_symbol(mv: PlayerMove) -> &'static str {
    match mv {
        PlayerMove::Rotate => "⬆️",
        PlayerMove::HardDrop => "⬇️",
        PlayerMove::ShiftLeft => "⬅️",
        PlayerMove::ShiftRight => "➡️",
        PlayerMove::Quit => "❌",
    }
}

/// The five reaction buttons, in the order they are attached to a game message
pub fn control_symbols() -> [&'static str; 5] {
    PlayerMove::ALL.map(move_symbol)
}

/// Map a reaction symbol to a move. Anything else is `None`.
pub fn symbol_to_move(symbol: &str) -> Option<PlayerMove> {
    match symbol.trim().trim_end_matches(VARIATION_SELECTOR) {
        "⬆" => Some(PlayerMove::Rotate),
        "⬇" => Some(PlayerMove::HardDrop),
        "⬅" => Some(PlayerMove::ShiftLeft),
        "➡" => Some(PlayerMove::ShiftRight),
        "❌" => Some(PlayerMove::Quit),
        _ => None,
    }
}

/// Map a terminal key to the reaction symbol it stands for.
pub fn key_to_symbol(key: KeyEvent) -> Option<&'static str> {
    let mv = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => PlayerMove::Rotate,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => {
            PlayerMove::HardDrop
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => PlayerMove::ShiftLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => PlayerMove::ShiftRight,
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => PlayerMove::Quit,
        _ => return None,
    };
    Some(move_symbol(mv))
}

/// Ctrl-C ends the game the same way the quit reaction does, without
/// waiting behind moves already queued.
pub fn should_abort(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
