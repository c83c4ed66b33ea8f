//! Text input component.
//!
//! Single-line query field that sits inline after the chips. Supports:
//! - Character input and deletion
//! - Cursor movement (left/right, home/end)
//! - Ctrl+U / Ctrl+W line and word deletion

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;

/// A text input widget.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The current input value.
    value: String,
    /// Cursor position within the value.
    cursor: usize,
    /// Placeholder text shown when empty.
    placeholder: String,
}

impl TextInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with an initial value.
    #[cfg(test)]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            value,
            cursor,
            placeholder: String::new(),
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// The placeholder text.
    #[cfg(test)]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move cursor to end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position.
    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.value.is_empty() {
                    return false;
                }
                self.clear();
                true
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.cursor == 0 {
                    return false;
                }
                let before = &self.value[..self.cursor];
                let trimmed = before.trim_end();
                let word_start = trimmed
                    .rfind(char::is_whitespace)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                self.value.replace_range(word_start..self.cursor, "");
                self.cursor = word_start;
                true
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            (KeyCode::Backspace, _) => match self.prev_boundary() {
                Some(prev) => {
                    self.value.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    true
                }
                None => false,
            },
            (KeyCode::Delete, _) => match self.next_boundary() {
                Some(next) => {
                    self.value.replace_range(self.cursor..next, "");
                    true
                }
                None => false,
            },
            (KeyCode::Left, _) => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                false
            }
            (KeyCode::Right, _) => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    /// Render the input inline (no border) into a single-row area.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (text, style) = if self.value.is_empty() {
            (self.placeholder.as_str(), Style::default().fg(theme.muted))
        } else {
            (self.value.as_str(), Style::default().fg(theme.fg))
        };
        frame.render_widget(Paragraph::new(Span::styled(text, style)), area);

        if focused {
            let offset = u16::try_from(Span::raw(&self.value[..self.cursor]).width()).unwrap_or(u16::MAX);
            let cursor_x = area.x.saturating_add(offset);
            if cursor_x < area.x + area.width {
                frame.set_cursor_position(Position::new(cursor_x, area.y));
            }
        }
    }
}
