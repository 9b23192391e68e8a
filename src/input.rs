//! Keyboard mapping for the terminal host.

use crate::core::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the game controller.
    Game(GameInput),
    /// Leave the program.
    Quit,
}

/// Map a key event. Only presses count, so holding Space cannot re-jump on
/// terminals that report repeats and releases.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => KeyAction::Game(GameInput::Jump),
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Game(GameInput::Other),
    };
    Some(action)
}
