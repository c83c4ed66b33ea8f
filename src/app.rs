//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: events go
//! through [`App::update`], and [`App::view`] draws the current state.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, trace};

use crate::autocomplete::Phase;
use crate::config::Config;
use crate::data::Candidate;
use crate::events::{resolve_key, Event, KeyAction, KeyContext};
use crate::ui::{
    render_context_help, ChipAutocomplete, ChipEvent, Notification, NotificationManager, Theme,
};

/// The main application struct that holds all state.
pub struct App {
    /// Whether the application should quit.
    should_quit: bool,
    /// The chip autocomplete widget.
    widget: ChipAutocomplete,
    /// Toasts for chip changes.
    notifications: NotificationManager,
    theme: Theme,
}

impl App {
    /// Create the application over `candidates`.
    pub fn new(candidates: Vec<Candidate>, config: &Config) -> Self {
        debug!(count = candidates.len(), "Creating application");
        Self {
            should_quit: false,
            widget: ChipAutocomplete::new(candidates, &config.settings),
            notifications: NotificationManager::new(),
            theme: Theme::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub fn widget(&self) -> &ChipAutocomplete {
        &self.widget
    }

    #[cfg(test)]
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// Selected candidates in chip order.
    pub fn selection(&self) -> Vec<Candidate> {
        self.widget.selection()
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        let chip_event = match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                match resolve_key(key_event, self.widget.is_focused()) {
                    KeyAction::Quit => {
                        info!("Quit requested");
                        self.should_quit = true;
                        None
                    }
                    action => self.widget.handle_action(action),
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                trace!("Terminal lost focus");
                self.widget.blur()
            }
            Event::FocusGained => None,
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
                self.widget.resized();
                None
            }
            Event::Tick => {
                self.notifications.tick();
                None
            }
        };

        if let Some(notification) = chip_event.as_ref().and_then(Notification::for_chip_event) {
            self.notifications.push(notification);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ChipEvent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.widget.handle_click(mouse.column, mouse.row)
            }
            _ => None,
        }
    }

    /// Render the application UI.
    ///
    /// The widget goes last so its overlay covers everything else.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Widget
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);

        let context = match self.widget.controller().phase() {
            Phase::Idle => KeyContext::Idle,
            Phase::Typing => KeyContext::Typing,
        };
        render_context_help(frame, chunks[2], context, &self.theme);

        let content = chunks[1];
        self.notifications.render(frame, content);

        let widget_area = Rect::new(
            content.x + 1,
            content.y,
            content.width.saturating_sub(2),
            content.height,
        );
        self.widget.render(frame, widget_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let count = self.widget.controller().chips().len();
        let title = Line::from(vec![
            Span::styled("chipfield", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {count} selected"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let header = Paragraph::new(title).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }
}
