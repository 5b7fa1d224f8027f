//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Model state changed; derived views must refresh.
    Refresh,
    /// Transient notification text to display.
    Notice(String),
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}
