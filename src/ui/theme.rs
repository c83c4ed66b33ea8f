//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the autocomplete widget.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Border of the focused input container.
    pub focus_border: Color,
    /// Border of the unfocused input container.
    pub idle_border: Color,
    /// Chip background.
    pub chip_bg: Color,
    /// Chip text.
    pub chip_fg: Color,
    /// Chip armed for deletion.
    pub chip_armed: Color,
    /// Placeholder and secondary text.
    pub muted: Color,
    /// Overlay cursor row.
    pub highlight: Color,
}

impl Theme {
    /// Style for a chip body.
    pub fn chip(&self, armed: bool) -> Style {
        if armed {
            Style::default()
                .fg(self.chip_fg)
                .bg(self.chip_armed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.chip_fg).bg(self.chip_bg)
        }
    }

    /// Style for the input container border.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus_border)
        } else {
            Style::default().fg(self.idle_border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            focus_border: Color::Yellow,
            idle_border: Color::DarkGray,
            chip_bg: Color::Gray,
            chip_fg: Color::Black,
            chip_armed: Color::Blue,
            muted: Color::DarkGray,
            highlight: Color::Cyan,
        }
    }
}
