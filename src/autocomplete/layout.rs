//! Overlay placement relative to the input surface.
//!
//! The controller never measures anything itself. It asks an
//! [`InputGeometry`] for the input's bounding box and turns that into an
//! overlay position. Reads happen only after the chip strip has been laid
//! out for the current frame.

use ratatui::layout::Rect;

/// Default vertical gap between the input and the overlay, in rows.
pub const DEFAULT_MENU_OFFSET: u16 = 1;

/// Something that can report where the input surface currently sits.
pub trait InputGeometry {
    /// The input's bounding box, or `None` when it is not laid out yet.
    fn input_bounds(&self) -> Option<Rect>;
}

impl InputGeometry for Rect {
    fn input_bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl InputGeometry for Option<Rect> {
    fn input_bounds(&self) -> Option<Rect> {
        *self
    }
}

/// Screen coordinates of the overlay's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayPosition {
    /// Row of the overlay's top edge.
    pub top: u16,
    /// Column of the overlay's left edge.
    pub left: u16,
}

impl OverlayPosition {
    /// Place the overlay below `input`, shifted down by `offset` rows.
    pub fn below(input: Rect, offset: u16) -> Self {
        Self {
            top: input.y.saturating_add(offset),
            left: input.x,
        }
    }
}
