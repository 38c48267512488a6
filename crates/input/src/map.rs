//! Key mapping from terminal events to game controls.

use crate::types::ControlKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key to one of the four paddle controls.
pub fn control_key(code: KeyCode) -> Option<ControlKey> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(ControlKey::P1Up),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(ControlKey::P1Down),
        KeyCode::Up => Some(ControlKey::P2Up),
        KeyCode::Down => Some(ControlKey::P2Down),
        _ => None,
    }
}

/// Keys that act as the start/restart button.
pub fn is_start_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R')
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
