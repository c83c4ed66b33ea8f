//! Chip strip: selected people as removable tags.
//!
//! Chips flow left to right and wrap inside the container; the query input
//! takes the rest of the last row. Each chip ends in a `×` delete control,
//! and the strip records where every control landed so clicks can be
//! resolved to a chip id.

use ratatui::{
    layout::{Position, Rect},
    style::Modifier,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::data::Chip;
use crate::ui::theme::Theme;

/// Glyph used for the delete control.
pub const DELETE_GLYPH: &str = "×";

/// Columns between chips.
const CHIP_GAP: u16 = 1;

/// Where one chip landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSlot {
    /// Chip id.
    pub id: String,
    /// Whole chip, delete control included.
    pub area: Rect,
    /// The `×` cell.
    pub delete: Rect,
}

/// Result of laying out chips and the input inside a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripLayout {
    /// Chip placements in display order.
    pub chips: Vec<ChipSlot>,
    /// Where the input goes.
    pub input: Rect,
    /// Rows used, at least 1.
    pub rows: u16,
}

impl StripLayout {
    /// Drop chips that fall outside `clip`, so they are neither drawn nor
    /// clickable.
    ///
    /// Rows only grow down the strip, so the dropped chips are always a
    /// suffix and the rest stay aligned with the chip sequence.
    pub fn retain_visible(&mut self, clip: Rect) {
        let visible = self
            .chips
            .iter()
            .take_while(|slot| clip.intersection(slot.area) == slot.area)
            .count();
        self.chips.truncate(visible);
    }

    /// Id of the chip whose delete control covers `position`.
    pub fn delete_hit(&self, position: Position) -> Option<&str> {
        self.chips
            .iter()
            .find(|slot| slot.delete.contains(position))
            .map(|slot| slot.id.as_str())
    }
}

/// Label drawn for a chip, padding and delete control included.
fn chip_label(chip: &Chip) -> String {
    format!(" {} {} ", chip.name(), DELETE_GLYPH)
}

/// Lay out chips and an input of at least `input_min_width` columns.
///
/// Rows may run past `area.height`; callers size the container from
/// [`StripLayout::rows`] first.
pub fn layout_strip(chips: &[Chip], area: Rect, input_min_width: u16) -> StripLayout {
    let left = area.x;
    let right = area.x.saturating_add(area.width);
    let mut x = left;
    let mut y = area.y;
    let mut slots = Vec::with_capacity(chips.len());

    for chip in chips {
        let label_width = Span::raw(chip_label(chip)).width();
        let width = u16::try_from(label_width).unwrap_or(u16::MAX).min(area.width);
        if x > left && x.saturating_add(width) > right {
            x = left;
            y = y.saturating_add(1);
        }
        let slot_area = Rect::new(x, y, width, 1);
        let delete_x = x.saturating_add(width).saturating_sub(2).max(x);
        slots.push(ChipSlot {
            id: chip.id().to_string(),
            area: slot_area,
            delete: Rect::new(delete_x, y, 1, 1),
        });
        x = x.saturating_add(width).saturating_add(CHIP_GAP);
    }

    let needed = input_min_width.min(area.width);
    if x > left && x.saturating_add(needed) > right {
        x = left;
        y = y.saturating_add(1);
    }
    let input = Rect::new(x, y, right.saturating_sub(x), 1);

    StripLayout {
        chips: slots,
        input,
        rows: y - area.y + 1,
    }
}

/// Draw chips at the positions computed by [`layout_strip`], clipped to
/// `clip`.
///
/// The armed chip uses the theme's armed style.
pub fn render_chip_strip(
    frame: &mut Frame,
    chips: &[Chip],
    layout: &StripLayout,
    clip: Rect,
    theme: &Theme,
) {
    let bounds = clip.intersection(frame.area());
    for (chip, slot) in chips.iter().zip(&layout.chips) {
        let area = slot.area.intersection(bounds);
        if area.is_empty() {
            continue;
        }
        let label = Span::styled(chip_label(chip), theme.chip(chip.highlighted));
        frame.render_widget(Paragraph::new(label), area);

        let delete = slot.delete.intersection(bounds);
        if !delete.is_empty() {
            let style = theme.chip(chip.highlighted).add_modifier(Modifier::BOLD);
            frame.render_widget(Paragraph::new(Span::styled(DELETE_GLYPH, style)), delete);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Candidate;

    fn chip(id: &str, name: &str) -> Chip {
        Chip::new(Candidate::new(id, name, "x@x.io", ""))
    }

    #[test]
    fn test_empty_strip_gives_input_whole_row() {
        let layout = layout_strip(&[], Rect::new(2, 3, 40, 5), 10);
        assert!(layout.chips.is_empty());
        assert_eq!(layout.input, Rect::new(2, 3, 40, 1));
        assert_eq!(layout.rows, 1);
    }

    #[test]
    fn test_chips_flow_then_input() {
        // " Ann × " is 7 columns wide
        let chips = vec![chip("1", "Ann"), chip("2", "Bo")];
        let layout = layout_strip(&chips, Rect::new(0, 0, 40, 5), 10);

        assert_eq!(layout.chips[0].area, Rect::new(0, 0, 7, 1));
        assert_eq!(layout.chips[0].delete, Rect::new(5, 0, 1, 1));
        assert_eq!(layout.chips[1].area, Rect::new(8, 0, 6, 1));
        assert_eq!(layout.input, Rect::new(15, 0, 25, 1));
        assert_eq!(layout.rows, 1);
    }

    #[test]
    fn test_input_wraps_when_row_is_full() {
        let chips = vec![chip("1", "Ann"), chip("2", "Bo")];
        let layout = layout_strip(&chips, Rect::new(0, 0, 18, 5), 10);
        assert_eq!(layout.input, Rect::new(0, 1, 18, 1));
        assert_eq!(layout.rows, 2);
    }

    #[test]
    fn test_chip_wraps_when_row_is_full() {
        let chips = vec![chip("1", "Ann"), chip("2", "Bo"), chip("3", "Carol")];
        let layout = layout_strip(&chips, Rect::new(0, 0, 16, 5), 4);
        assert_eq!(layout.chips[2].area.y, 1);
        assert_eq!(layout.chips[2].area.x, 0);
    }

    #[test]
    fn test_delete_hit() {
        let chips = vec![chip("1", "Ann"), chip("2", "Bo")];
        let layout = layout_strip(&chips, Rect::new(0, 0, 40, 5), 10);

        assert_eq!(layout.delete_hit(Position::new(5, 0)), Some("1"));
        assert_eq!(layout.delete_hit(Position::new(12, 0)), Some("2"));
        assert_eq!(layout.delete_hit(Position::new(1, 0)), None);
    }

    #[test]
    fn test_retain_visible_drops_overflowing_rows() {
        let chips = vec![chip("1", "Ann"), chip("2", "Bo"), chip("3", "Carol")];
        let mut layout = layout_strip(&chips, Rect::new(0, 0, 16, 1), 4);
        assert_eq!(layout.chips.len(), 3);

        layout.retain_visible(Rect::new(0, 0, 16, 1));
        let ids: Vec<_> = layout.chips.iter().map(|slot| slot.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(layout.delete_hit(Position::new(7, 1)), None);
    }

    #[test]
    fn test_huge_label_width_saturates() {
        // Label is 65541 columns, which a plain cast would wrap to 5
        let long = "x".repeat(65_537);
        let chips = vec![chip("1", &long)];
        let layout = layout_strip(&chips, Rect::new(0, 0, 30, 1), 4);
        assert_eq!(layout.chips[0].area.width, 30);
    }

    #[test]
    fn test_removing_chip_moves_input() {
        let chips = vec![chip("1", "Ann"), chip("2", "Bo")];
        let with_two = layout_strip(&chips, Rect::new(0, 0, 40, 5), 10);
        let with_one = layout_strip(&chips[..1], Rect::new(0, 0, 40, 5), 10);
        assert!(with_one.input.x < with_two.input.x);
    }
}
