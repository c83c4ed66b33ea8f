//! Click-away dismissal.
//!
//! While the overlay is open the widget holds a [`ClickAwaySubscription`].
//! Every pointer-down is resolved to a [`HitTarget`]; only a click that lands
//! outside the input container and is not a chip delete control dismisses
//! the overlay. Dropping the subscription detaches the listener.

use tracing::trace;

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The delete control of the chip with this id.
    ChipDelete(String),
    /// The overlay row for the candidate with this id.
    SuggestionRow(String),
    /// Anywhere inside the input container (chips included).
    InputContainer,
    /// Anywhere else.
    Outside,
}

impl HitTarget {
    /// Whether a click on this target should dismiss the overlay.
    ///
    /// Suggestion rows stop propagation and chip delete controls are
    /// exempt, even though both sit outside the input box.
    pub fn dismisses(&self) -> bool {
        matches!(self, HitTarget::Outside)
    }
}

/// A click-away listener scoped to the overlay's open lifetime.
#[derive(Debug, Default)]
pub struct ClickAwaySubscription {
    handled: u32,
}

impl ClickAwaySubscription {
    /// Attach a new listener.
    pub fn subscribe() -> Self {
        trace!("Click-away listener attached");
        Self::default()
    }

    /// Resolve a click. Returns `true` if the overlay should be dismissed.
    pub fn observe(&mut self, target: &HitTarget) -> bool {
        self.handled = self.handled.saturating_add(1);
        let dismiss = target.dismisses();
        trace!(?target, dismiss, "Click-away listener observed click");
        dismiss
    }

    /// Number of clicks this listener has seen.
    #[cfg(test)]
    pub fn observed(&self) -> u32 {
        self.handled
    }
}

impl Drop for ClickAwaySubscription {
    fn drop(&mut self) {
        trace!(observed = self.handled, "Click-away listener detached");
    }
}
