//! Event handling for the application.
//!
//! Terminal events are polled by [`EventHandler`] and key presses are mapped
//! to widget actions by [`resolve_key`].

mod handler;
mod keys;

use crossterm::event::{KeyEvent, MouseEvent};

pub use handler::EventHandler;
pub use keys::{get_context_hints, resolve_key, KeyAction, KeyContext};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse button or movement event.
    Mouse(MouseEvent),
    /// The terminal window gained focus.
    FocusGained,
    /// The terminal window lost focus.
    FocusLost,
    /// The terminal was resized.
    Resize(u16, u16),
    /// No event within the tick rate.
    Tick,
}
