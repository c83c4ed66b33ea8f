//! User interface components.
//!
//! Rendering and hit-testing for the chip autocomplete widget. State lives in
//! [`crate::autocomplete`]; this layer draws it and maps screen positions back
//! to widget targets.

mod components;
pub mod theme;

pub use components::{
    render_context_help, ChipAutocomplete, ChipEvent, Notification, NotificationManager,
};
pub use theme::Theme;
