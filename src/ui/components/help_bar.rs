//! Contextual help bar component.
//!
//! One line of key hints under the widget, switching with the focus state.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::Theme;

/// Render the hints for `context`.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext, theme: &Theme) {
    let spans = parse_hints_to_spans(get_context_hints(context), theme);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Split hint text into spans, keys (in brackets) styled apart from the
/// descriptions.
fn parse_hints_to_spans(hints: &str, theme: &Theme) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme.highlight);
    let text_style = Style::default().fg(theme.muted);
    let mut spans = Vec::new();
    let mut rest = hints;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), text_style));
        }
        spans.push(Span::styled(rest[open..=close].to_string(), key_style));
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }
    spans
}
