//! Headless chip autocomplete core.
//!
//! This module holds the state machine, the filter, overlay placement and
//! click-away dismissal. It has no knowledge of terminals; the UI layer feeds
//! it events and reads state back for rendering.

mod controller;
mod dismissal;
mod filter;
mod layout;

pub use controller::{
    AutocompleteController, BackspaceOutcome, ClickOutcome, ControllerOptions, Phase,
};
pub use dismissal::HitTarget;
pub use filter::MatchMode;
pub use layout::{OverlayPosition, DEFAULT_MENU_OFFSET};
