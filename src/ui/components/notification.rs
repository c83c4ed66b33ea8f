//! Toast messages for chip changes.
//!
//! One message at a time, drawn in the bottom-right corner and expired on
//! ticks.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::chip_autocomplete::ChipEvent;

/// Kind of toast, which picks its color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
}

impl NotificationType {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::Info => "ℹ",
            NotificationType::Success => "✓",
            NotificationType::Warning => "⚠",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            NotificationType::Info => Color::Blue,
            NotificationType::Success => Color::Green,
            NotificationType::Warning => Color::Yellow,
        }
    }
}

/// A transient message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    /// Create a toast that lives for `duration`.
    pub fn new(
        message: impl Into<String>,
        notification_type: NotificationType,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info, Duration::from_secs(2))
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success, Duration::from_secs(2))
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning, Duration::from_secs(3))
    }

    /// The toast to show for a widget event.
    pub fn for_chip_event(event: &ChipEvent) -> Option<Self> {
        match event {
            ChipEvent::Added(candidate) => Some(Self::success(format!("Added {}", candidate.name))),
            ChipEvent::Removed(candidate) => {
                Some(Self::info(format!("Removed {}", candidate.name)))
            }
            ChipEvent::Armed(_) => Some(Self::warning("Backspace again to remove")),
            ChipEvent::Closed => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Holds the current toast, if any.
#[derive(Debug, Default)]
pub struct NotificationManager {
    current: Option<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notification`, replacing whatever was up.
    pub fn push(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the toast once it expires. Call on each tick.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
    }

    /// Draw the toast in the bottom-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(notification) = &self.current else {
            return;
        };

        let text = format!("{} {}", notification.notification_type.icon(), notification.message);
        let text_width = u16::try_from(Span::raw(text.as_str()).width()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(4).min(area.width);
        if width < 5 || area.height < 3 {
            return;
        }
        let toast = Rect::new(
            area.right().saturating_sub(width),
            area.bottom().saturating_sub(3),
            width,
            3,
        );

        let style = Style::default().fg(notification.notification_type.color());
        frame.render_widget(Clear, toast);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {text}"),
            style.add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(paragraph, toast);
    }
}
