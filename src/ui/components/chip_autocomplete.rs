//! Chip autocomplete widget.
//!
//! Glues the headless [`AutocompleteController`] to the terminal: keys and
//! clicks go in, chips, input and overlay come out. Each render lays out the
//! chip strip first, records where the input landed, and only then lets the
//! controller read that geometry to place the overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};
use tracing::debug;

use super::chip_strip::{layout_strip, render_chip_strip, StripLayout};
use super::input::TextInput;
use super::suggestion_overlay::SuggestionOverlay;
use crate::autocomplete::{
    AutocompleteController, BackspaceOutcome, ClickOutcome, HitTarget, OverlayPosition,
};
use crate::config::Settings;
use crate::data::Candidate;
use crate::events::KeyAction;
use crate::ui::theme::Theme;

/// Narrowest the input may get before it wraps under the chips.
const MIN_INPUT_WIDTH: u16 = 12;

/// Something the parent view may want to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipEvent {
    /// A candidate became a chip.
    Added(Candidate),
    /// A chip was removed.
    Removed(Candidate),
    /// The tail chip (by id) is armed; another backspace removes it.
    Armed(String),
    /// The overlay closed.
    Closed,
}

/// The chip autocomplete widget.
#[derive(Debug)]
pub struct ChipAutocomplete {
    controller: AutocompleteController,
    input: TextInput,
    overlay: SuggestionOverlay,
    theme: Theme,
    /// Container area from the last render.
    container: Rect,
    /// Chip and input placement from the last render.
    strip: StripLayout,
    /// Input bounds from the last render, `None` before the first one.
    input_bounds: Option<Rect>,
}

impl ChipAutocomplete {
    /// Build the widget over a fixed candidate list.
    pub fn new(candidates: Vec<Candidate>, settings: &Settings) -> Self {
        let mut input = TextInput::new();
        input.set_placeholder(settings.placeholder.clone());
        Self {
            controller: AutocompleteController::with_options(
                candidates,
                settings.controller_options(),
            ),
            input,
            overlay: SuggestionOverlay::new(settings.max_visible_suggestions),
            theme: Theme::default(),
            container: Rect::default(),
            strip: StripLayout::default(),
            input_bounds: None,
        }
    }

    /// The underlying controller.
    pub fn controller(&self) -> &AutocompleteController {
        &self.controller
    }

    /// Whether the input has focus (overlay open).
    pub fn is_focused(&self) -> bool {
        self.controller.is_open()
    }

    /// Selected candidates in chip order.
    pub fn selection(&self) -> Vec<Candidate> {
        self.controller
            .chips()
            .iter()
            .map(|chip| chip.candidate.clone())
            .collect()
    }

    /// The query text as shown in the input.
    #[cfg(test)]
    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    /// Overlay cursor index.
    #[cfg(test)]
    pub fn overlay_cursor(&self) -> usize {
        self.overlay.cursor()
    }

    /// Focus the input.
    pub fn focus(&mut self) {
        self.controller.focus();
        self.overlay.reset();
        self.sync();
    }

    /// Leave the input, closing the overlay.
    pub fn blur(&mut self) -> Option<ChipEvent> {
        let was_open = self.controller.is_open();
        self.controller.blur_or_click_away();
        self.sync();
        was_open.then_some(ChipEvent::Closed)
    }

    /// The terminal was resized; re-measure the input on the next render.
    pub fn resized(&mut self) {
        self.controller.invalidate_layout();
    }

    /// Apply a resolved key action.
    pub fn handle_action(&mut self, action: KeyAction) -> Option<ChipEvent> {
        let event = match action {
            KeyAction::Focus => {
                self.focus();
                None
            }
            KeyAction::Blur => self.blur(),
            KeyAction::Backspace => self.backspace(),
            KeyAction::CursorUp => {
                self.overlay.move_up();
                None
            }
            KeyAction::CursorDown => {
                self.overlay.move_down(self.controller.suggestions().len());
                None
            }
            KeyAction::Confirm => self.confirm(),
            KeyAction::Edit(key) => {
                self.edit(key);
                None
            }
            KeyAction::Quit | KeyAction::None => None,
        };
        self.sync();
        event
    }

    fn backspace(&mut self) -> Option<ChipEvent> {
        if !self.input.is_empty() {
            self.edit(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
            return None;
        }
        match self.controller.backspace() {
            BackspaceOutcome::Armed(id) => Some(ChipEvent::Armed(id)),
            BackspaceOutcome::Deleted(candidate) => Some(ChipEvent::Removed(candidate)),
            BackspaceOutcome::Ignored => None,
        }
    }

    fn confirm(&mut self) -> Option<ChipEvent> {
        let candidate = self
            .overlay
            .cursor_id(self.controller.suggestions())
            .and_then(|id| self.controller.suggestions().iter().find(|c| c.id == id))
            .cloned()?;
        if self.controller.select(&candidate.id) {
            self.overlay.reset();
            Some(ChipEvent::Added(candidate))
        } else {
            None
        }
    }

    fn edit(&mut self, key: KeyEvent) {
        if self.input.handle_input(key) {
            self.controller.type_query(self.input.value());
            self.overlay.reset();
        }
    }

    /// Keep the text field and overlay cursor in step with the controller.
    fn sync(&mut self) {
        if self.input.value() != self.controller.query() {
            self.input.set_value(self.controller.query());
        }
        self.overlay.clamp(self.controller.suggestions().len());
        if !self.controller.is_open() {
            self.overlay.clear_hits();
        }
    }

    /// Resolve a screen position against the last render.
    ///
    /// The overlay is drawn on top, so its rows win over anything beneath.
    pub fn hit_test(&self, position: Position) -> HitTarget {
        if self.controller.is_open() {
            if let Some(id) = self.overlay.row_hit(position) {
                return HitTarget::SuggestionRow(id.to_string());
            }
        }
        if let Some(id) = self.strip.delete_hit(position) {
            return HitTarget::ChipDelete(id.to_string());
        }
        if self.container.contains(position) {
            return HitTarget::InputContainer;
        }
        HitTarget::Outside
    }

    /// Handle a left-button press at a screen position.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<ChipEvent> {
        let target = self.hit_test(Position::new(column, row));
        debug!(column, row, ?target, "Click");
        let event = match self.controller.click(&target) {
            ClickOutcome::Deleted(candidate) => Some(ChipEvent::Removed(candidate)),
            ClickOutcome::Selected(candidate) => {
                self.overlay.reset();
                Some(ChipEvent::Added(candidate))
            }
            ClickOutcome::Focused => {
                self.overlay.reset();
                None
            }
            ClickOutcome::Dismissed => Some(ChipEvent::Closed),
            ClickOutcome::Ignored => None,
        };
        self.sync();
        event
    }

    /// Rows the container needs at `width` columns.
    pub fn height_for(&self, width: u16) -> u16 {
        let inner = Rect::new(0, 0, width.saturating_sub(2), 1);
        layout_strip(self.controller.chips(), inner, MIN_INPUT_WIDTH).rows + 2
    }

    /// Render the container, chips, input and (if open) the overlay.
    ///
    /// Call this last in a frame so the overlay draws over everything else.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.controller.is_open();
        let height = self.height_for(area.width).min(area.height);
        self.container = Rect::new(area.x, area.y, area.width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(focused))
            .title(Span::styled(" People ", self.theme.border(focused)));
        let inner = block.inner(self.container);
        frame.render_widget(block, self.container);

        self.strip = layout_strip(self.controller.chips(), inner, MIN_INPUT_WIDTH);
        self.strip.retain_visible(inner);
        render_chip_strip(frame, self.controller.chips(), &self.strip, inner, &self.theme);

        let input_area = self.strip.input.intersection(inner);
        self.input_bounds = (!input_area.is_empty()).then_some(input_area);
        if let Some(bounds) = self.input_bounds {
            self.input.render(frame, bounds, focused, &self.theme);
        }

        // Chips are placed; the input's position is now final for this frame.
        self.controller.settle_layout(&self.input_bounds);

        if self.controller.is_open() {
            let position = self.controller.position().unwrap_or(OverlayPosition {
                top: self.container.bottom(),
                left: self.container.x,
            });
            self.overlay
                .render(frame, self.controller.suggestions(), position, &self.theme);
        } else {
            self.overlay.clear_hits();
        }
    }
}
