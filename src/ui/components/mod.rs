//! Reusable UI components.

mod chip_autocomplete;
mod chip_strip;
mod help_bar;
mod input;
mod notification;
mod suggestion_overlay;

pub use chip_autocomplete::{ChipAutocomplete, ChipEvent};
pub use help_bar::render_context_help;
pub use notification::{Notification, NotificationManager};
