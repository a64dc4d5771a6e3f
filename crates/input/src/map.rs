//! Key mapping from terminal events to controls.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Classify a key press.
pub fn map_key(key: KeyEvent) -> Control {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Control::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Control::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Control::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Control::Right,
        KeyCode::Char(' ') => Control::Fire,
        _ => Control::Other,
    }
}

/// Check if key should stop the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
