//! Key binding definitions.
//!
//! Keys mean different things depending on whether the input has focus:
//! unfocused, single letters are shortcuts; focused, they are typed text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Focus the input.
    Focus,
    /// Leave the input (same as clicking away).
    Blur,
    /// Backspace: chip-level when the query is empty, text edit otherwise.
    Backspace,
    /// Move the overlay cursor up.
    CursorUp,
    /// Move the overlay cursor down.
    CursorDown,
    /// Select the suggestion under the overlay cursor.
    Confirm,
    /// Forward to the text input.
    Edit(KeyEvent),
    /// Nothing bound.
    None,
}

/// Which key hints apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Input not focused.
    Idle,
    /// Typing with the overlay open.
    Typing,
}

/// Resolve a key press in the given focus state.
pub fn resolve_key(key: KeyEvent, focused: bool) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return KeyAction::Quit;
    }

    if !focused {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => KeyAction::Quit,
            (KeyCode::Tab, _)
            | (KeyCode::Enter, _)
            | (KeyCode::Char('i'), KeyModifiers::NONE)
            | (KeyCode::Char('/'), KeyModifiers::NONE) => KeyAction::Focus,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Tab => KeyAction::Blur,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Up => KeyAction::CursorUp,
        KeyCode::Down => KeyAction::CursorDown,
        KeyCode::Enter => KeyAction::Confirm,
        _ => KeyAction::Edit(key),
    }
}

/// Short key hints for the help bar, keys in brackets.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Idle => "[Tab/i] focus  [click ×] remove chip  [q] quit",
        KeyContext::Typing => {
            "[↑/↓] move  [Enter] add  [Backspace×2] remove last  [Esc] close  [Ctrl+C] quit"
        }
    }
}
