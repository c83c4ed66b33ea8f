//! Suggestion overlay.
//!
//! A bordered list drawn on top of everything else at the position the
//! controller computed. Besides drawing, it keeps a keyboard cursor and the
//! screen rows of the visible suggestions so clicks resolve to candidate ids.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::autocomplete::OverlayPosition;
use crate::data::Candidate;
use crate::ui::theme::Theme;

/// Widest the overlay gets, borders included.
const MAX_OVERLAY_WIDTH: u16 = 56;

/// Overlay view state.
#[derive(Debug, Clone)]
pub struct SuggestionOverlay {
    /// Cursor index into the suggestion set.
    cursor: usize,
    /// First visible index.
    offset: usize,
    /// Rows shown before scrolling.
    max_visible: u16,
    /// Visible rows from the last render.
    rows: Vec<(String, Rect)>,
}

impl SuggestionOverlay {
    /// Create an overlay showing at most `max_visible` rows.
    pub fn new(max_visible: u16) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            max_visible: max_visible.max(1),
            rows: Vec::new(),
        }
    }

    /// Current cursor index.
    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Keep the cursor inside a suggestion set of `len` items.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
        if self.offset > self.cursor {
            self.offset = self.cursor;
        }
    }

    /// Move the cursor to the first row.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// Move the cursor up one row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row within `len` items.
    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Id of the suggestion under the cursor.
    pub fn cursor_id<'a>(&self, suggestions: &'a [Candidate]) -> Option<&'a str> {
        suggestions.get(self.cursor).map(|c| c.id.as_str())
    }

    /// Id of the row drawn at `position` in the last render.
    pub fn row_hit(&self, position: Position) -> Option<&str> {
        self.rows
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(id, _)| id.as_str())
    }

    /// Forget row hit regions (overlay closed).
    pub fn clear_hits(&mut self) {
        self.rows.clear();
    }

    /// Area the overlay would occupy for `count` suggestions.
    pub fn area(&self, position: OverlayPosition, bounds: Rect, count: usize) -> Rect {
        let visible = u16::try_from(count).unwrap_or(u16::MAX).clamp(1, self.max_visible);
        let width = MAX_OVERLAY_WIDTH.min(bounds.right().saturating_sub(position.left));
        let rect = Rect::new(position.left, position.top, width, visible + 2);
        rect.intersection(bounds)
    }

    /// Draw the overlay and record row hit regions.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        suggestions: &[Candidate],
        position: OverlayPosition,
        theme: &Theme,
    ) {
        self.rows.clear();
        self.clamp(suggestions.len());

        let area = self.area(position, frame.area(), suggestions.len());
        if area.width < 3 || area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.highlight));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if suggestions.is_empty() {
            let empty = Paragraph::new("No matching people").style(Style::default().fg(theme.muted));
            frame.render_widget(empty, inner);
            return;
        }

        let visible = inner.height as usize;
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible {
            self.offset = self.cursor + 1 - visible;
        }

        let items: Vec<ListItem> = suggestions
            .iter()
            .skip(self.offset)
            .take(visible)
            .map(|candidate| {
                ListItem::new(Line::from(vec![
                    Span::styled(candidate.name.clone(), Style::default().fg(theme.fg)),
                    Span::raw("  "),
                    Span::styled(candidate.email.clone(), Style::default().fg(theme.muted)),
                ]))
            })
            .collect();

        let rows = suggestions.iter().skip(self.offset).take(visible);
        for (y, candidate) in (inner.y..inner.bottom()).zip(rows) {
            let rect = Rect::new(inner.x, y, inner.width, 1);
            self.rows.push((candidate.id.clone(), rect));
        }

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(theme.highlight)
                .fg(theme.chip_fg)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default();
        state.select(Some(self.cursor - self.offset));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
