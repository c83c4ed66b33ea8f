//! Widget settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::autocomplete::{ControllerOptions, MatchMode, DEFAULT_MENU_OFFSET};

/// Default placeholder shown in an empty input.
pub const DEFAULT_PLACEHOLDER: &str = "Add new user...";

/// Default number of rows the overlay shows before scrolling.
pub const DEFAULT_MAX_VISIBLE_SUGGESTIONS: u16 = 8;

/// User-tunable settings for the autocomplete widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Rows between the input and the suggestion overlay.
    pub menu_offset: u16,
    /// Match the query against names with exact case.
    pub case_sensitive: bool,
    /// Keep chip highlights when the chip sequence changes.
    pub keep_highlight_on_change: bool,
    /// Placeholder text for the empty input.
    pub placeholder: String,
    /// Overlay height limit, in rows.
    pub max_visible_suggestions: u16,
    /// Candidate data file. Falls back to the bundled sample set.
    pub data_path: Option<PathBuf>,
}

impl Settings {
    /// Controller options derived from these settings.
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            match_mode: MatchMode::from_case_sensitive(self.case_sensitive),
            menu_offset: self.menu_offset,
            keep_highlight_on_change: self.keep_highlight_on_change,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            menu_offset: DEFAULT_MENU_OFFSET,
            case_sensitive: false,
            keep_highlight_on_change: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_visible_suggestions: DEFAULT_MAX_VISIBLE_SUGGESTIONS,
            data_path: None,
        }
    }
}
