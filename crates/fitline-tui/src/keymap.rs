//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    AddPoint,
    NextRow,
    PrevRow,
    RemoveRow,
    InterceptUp,
    InterceptDown,
    SlopeUp,
    SlopeDown,
    ToggleHistory,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Up => KeyAction::CursorUp,
        KeyCode::Down => KeyAction::CursorDown,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::AddPoint,
        KeyCode::Char('A') => KeyAction::InterceptUp,
        KeyCode::Char('a') => KeyAction::InterceptDown,
        KeyCode::Char('B') => KeyAction::SlopeUp,
        KeyCode::Char('b') => KeyAction::SlopeDown,
        KeyCode::Char('j') | KeyCode::Tab => KeyAction::NextRow,
        KeyCode::Char('k') | KeyCode::BackTab => KeyAction::PrevRow,
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => KeyAction::RemoveRow,
        KeyCode::Char('h') => KeyAction::ToggleHistory,
        _ => KeyAction::None,
    }
}
