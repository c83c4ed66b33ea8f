//! The chip autocomplete state machine.
//!
//! [`AutocompleteController`] owns the chip sequence, the query text and the
//! overlay state. Views only read it. Every transition runs synchronously and
//! derives the next chip and suggestion sequences from the previous ones.
//!
//! ## Phases
//!
//! - `Idle`: overlay closed.
//! - `Typing`: overlay open, suggestions visible.
//!
//! Independently of the phase, the tail chip may be armed for deletion
//! (see [`AutocompleteController::tail_highlighted`]).

use tracing::{debug, trace};

use super::dismissal::{ClickAwaySubscription, HitTarget};
use super::filter::{filter_candidates, MatchMode};
use super::layout::{InputGeometry, OverlayPosition, DEFAULT_MENU_OFFSET};
use crate::data::{Candidate, Chip};

/// The controller's coarse phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Overlay closed.
    #[default]
    Idle,
    /// Overlay open.
    Typing,
}

/// What a backspace did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackspaceOutcome {
    /// Query not empty, or no chips.
    Ignored,
    /// The tail chip (by id) is now armed.
    Armed(String),
    /// The armed tail chip was removed.
    Deleted(Candidate),
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A chip delete control removed this candidate's chip.
    Deleted(Candidate),
    /// A suggestion row turned this candidate into a chip.
    Selected(Candidate),
    /// The input container took focus.
    Focused,
    /// The overlay was dismissed.
    Dismissed,
    /// Nothing changed.
    Ignored,
}

/// Tunables for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// How the query is matched against names.
    pub match_mode: MatchMode,
    /// Rows between the input and the overlay.
    pub menu_offset: u16,
    /// Keep chip highlights when the chip sequence changes.
    pub keep_highlight_on_change: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            menu_offset: DEFAULT_MENU_OFFSET,
            keep_highlight_on_change: false,
        }
    }
}

/// State machine behind the chip autocomplete widget.
#[derive(Debug)]
pub struct AutocompleteController {
    /// The full, fixed candidate list in source order.
    candidates: Vec<Candidate>,
    /// Selected chips in selection order.
    chips: Vec<Chip>,
    /// Derived suggestion set.
    suggestions: Vec<Candidate>,
    /// Current query text.
    query: String,
    /// Whether the overlay is open.
    open: bool,
    /// Last computed overlay position.
    position: Option<OverlayPosition>,
    /// The overlay needs a fresh geometry read.
    layout_dirty: bool,
    /// Click-away listener, present only while the overlay is open.
    click_away: Option<ClickAwaySubscription>,
    options: ControllerOptions,
}

impl AutocompleteController {
    /// Create a controller over a fixed candidate list.
    #[cfg(test)]
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self::with_options(candidates, ControllerOptions::default())
    }

    /// Create a controller with custom options.
    pub fn with_options(candidates: Vec<Candidate>, options: ControllerOptions) -> Self {
        debug!(count = candidates.len(), ?options, "Creating autocomplete controller");
        let suggestions = candidates.clone();
        Self {
            candidates,
            chips: Vec::new(),
            suggestions,
            query: String::new(),
            open: false,
            position: None,
            layout_dirty: false,
            click_away: None,
            options,
        }
    }

    /// All candidates in source order.
    #[cfg(test)]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Selected chips in display order.
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Current suggestion set.
    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        if self.open {
            Phase::Typing
        } else {
            Phase::Idle
        }
    }

    /// Whether the tail chip is armed for deletion.
    #[cfg(test)]
    pub fn tail_highlighted(&self) -> bool {
        self.chips.last().is_some_and(|chip| chip.highlighted)
    }

    /// Last computed overlay position, if any.
    pub fn position(&self) -> Option<OverlayPosition> {
        self.position
    }

    /// Whether the overlay position is waiting for a geometry read.
    pub fn needs_layout(&self) -> bool {
        self.open && self.layout_dirty
    }

    /// Whether a click-away listener is attached.
    #[cfg(test)]
    pub fn is_listening_for_click_away(&self) -> bool {
        self.click_away.is_some()
    }

    /// The active options.
    #[cfg(test)]
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Input gained focus: open the overlay and refresh suggestions.
    pub fn focus(&mut self) {
        if !self.open {
            debug!("Overlay opened");
            self.open = true;
            self.layout_dirty = true;
            self.click_away = Some(ClickAwaySubscription::subscribe());
        }
        self.refilter();
    }

    /// Replace the query text and refilter.
    pub fn type_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        trace!(query = %self.query, "Query changed");
        self.refilter();
    }

    /// Turn a suggested candidate into a chip.
    ///
    /// Returns `false` without touching state when `id` is not in the
    /// current suggestion set.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(candidate) = self.suggestions.iter().find(|c| c.id == id).cloned() else {
            trace!(id, "Ignoring select for id not in suggestions");
            return false;
        };

        debug!(id, name = %candidate.name, "Candidate selected");
        let chips = self
            .chips
            .iter()
            .cloned()
            .chain(std::iter::once(Chip::new(candidate)))
            .collect();
        self.chips = self.settle_highlights(chips);
        self.query.clear();
        self.refilter();
        self.chips_changed();
        true
    }

    /// Remove the chip with `id`, wherever it sits.
    ///
    /// Returns the candidate back, or `None` if no chip has that id.
    pub fn delete(&mut self, id: &str) -> Option<Candidate> {
        let removed = self.chips.iter().find(|chip| chip.id() == id)?.candidate.clone();

        debug!(id, name = %removed.name, "Chip deleted");
        let chips = self
            .chips
            .iter()
            .filter(|chip| chip.id() != id)
            .cloned()
            .collect();
        self.chips = self.settle_highlights(chips);
        self.refilter();
        self.chips_changed();
        Some(removed)
    }

    /// Backspace with the chip-level semantics.
    ///
    /// Only acts on an empty query: the first press arms the tail chip, the
    /// second removes it.
    pub fn backspace(&mut self) -> BackspaceOutcome {
        if !self.query.is_empty() {
            return BackspaceOutcome::Ignored;
        }
        let Some(tail) = self.chips.last() else {
            return BackspaceOutcome::Ignored;
        };

        if tail.highlighted {
            let id = tail.id().to_string();
            match self.delete(&id) {
                Some(candidate) => BackspaceOutcome::Deleted(candidate),
                None => BackspaceOutcome::Ignored,
            }
        } else {
            let id = tail.id().to_string();
            let last = self.chips.len() - 1;
            self.chips = self
                .chips
                .iter()
                .enumerate()
                .map(|(i, chip)| if i == last { chip.with_highlight(true) } else { chip.clone() })
                .collect();
            debug!(id = %id, "Tail chip armed for deletion");
            BackspaceOutcome::Armed(id)
        }
    }

    /// Close the overlay and clear the query. Chips are left untouched.
    pub fn blur_or_click_away(&mut self) {
        if self.open {
            debug!("Overlay closed");
        }
        self.open = false;
        self.layout_dirty = false;
        self.click_away = None;
        self.query.clear();
        self.refilter();
    }

    /// Route a pointer-down on the widget's surface.
    ///
    /// Chip delete controls delete, suggestion rows select, the input
    /// container focuses. Afterwards the click-away listener (if attached)
    /// decides whether the click dismisses the overlay.
    pub fn click(&mut self, target: &HitTarget) -> ClickOutcome {
        let outcome = match target {
            HitTarget::ChipDelete(id) => self.delete(id).map(ClickOutcome::Deleted),
            HitTarget::SuggestionRow(id) => {
                let candidate = self.suggestions.iter().find(|c| &c.id == id).cloned();
                if self.select(id) {
                    candidate.map(ClickOutcome::Selected)
                } else {
                    None
                }
            }
            HitTarget::InputContainer => {
                self.focus();
                Some(ClickOutcome::Focused)
            }
            HitTarget::Outside => None,
        };

        let dismiss = self
            .click_away
            .as_mut()
            .is_some_and(|listener| listener.observe(target));
        if dismiss {
            self.blur_or_click_away();
            return ClickOutcome::Dismissed;
        }
        outcome.unwrap_or(ClickOutcome::Ignored)
    }

    /// Force a geometry read on the next layout pass (e.g. after a resize).
    pub fn invalidate_layout(&mut self) {
        if self.open {
            self.layout_dirty = true;
        }
    }

    /// Recompute the overlay position if it is stale.
    ///
    /// Must run after the chip strip has been laid out for the frame.
    /// Returns `true` if a new position was captured. When the input cannot
    /// be measured the update is skipped and retried on the next call.
    pub fn settle_layout(&mut self, geometry: &impl InputGeometry) -> bool {
        if !self.needs_layout() {
            return false;
        }
        let Some(bounds) = geometry.input_bounds() else {
            trace!("Input not measurable, keeping last overlay position");
            return false;
        };

        let position = OverlayPosition::below(bounds, self.options.menu_offset);
        trace!(top = position.top, left = position.left, "Overlay positioned");
        self.position = Some(position);
        self.layout_dirty = false;
        true
    }

    fn refilter(&mut self) {
        self.suggestions = filter_candidates(
            &self.candidates,
            &self.chips,
            &self.query,
            self.options.match_mode,
        );
    }

    fn chips_changed(&mut self) {
        if self.open {
            self.layout_dirty = true;
        }
    }

    fn settle_highlights(&self, chips: Vec<Chip>) -> Vec<Chip> {
        if self.options.keep_highlight_on_change {
            return chips;
        }
        chips.iter().map(|chip| chip.with_highlight(false)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use std::cell::Cell;

    fn people() -> Vec<Candidate> {
        vec![
            Candidate::new("1", "Alice", "alice@x.io", ""),
            Candidate::new("2", "Bob", "bob@x.io", ""),
            Candidate::new("3", "Carol", "carol@x.io", ""),
        ]
    }

    fn ids(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.id.as_str()).collect()
    }

    fn chip_ids(controller: &AutocompleteController) -> Vec<&str> {
        controller.chips().iter().map(Chip::id).collect()
    }

    fn assert_partitioned(controller: &AutocompleteController) {
        for chip in controller.chips() {
            assert!(
                controller.suggestions().iter().all(|s| s.id != chip.id()),
                "chip {} also suggested",
                chip.id()
            );
        }
        let expected = filter_candidates(
            controller.candidates(),
            controller.chips(),
            controller.query(),
            controller.options().match_mode,
        );
        assert_eq!(controller.suggestions(), expected.as_slice());
    }

    /// Geometry that counts how often it was measured.
    struct RecordingGeometry {
        bounds: Rect,
        reads: Cell<u32>,
    }

    impl RecordingGeometry {
        fn new(bounds: Rect) -> Self {
            Self {
                bounds,
                reads: Cell::new(0),
            }
        }
    }

    impl InputGeometry for RecordingGeometry {
        fn input_bounds(&self) -> Option<Rect> {
            self.reads.set(self.reads.get() + 1);
            Some(self.bounds)
        }
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = AutocompleteController::new(people());
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_open());
        assert!(controller.chips().is_empty());
        assert_eq!(controller.suggestions().len(), 3);
        assert!(!controller.is_listening_for_click_away());
    }

    #[test]
    fn test_focus_opens_overlay() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        assert_eq!(controller.phase(), Phase::Typing);
        assert!(controller.needs_layout());
        assert!(controller.is_listening_for_click_away());
        assert_eq!(ids(controller.suggestions()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_type_query_filters_without_changing_open_state() {
        let mut controller = AutocompleteController::new(people());
        controller.type_query("o");
        assert!(!controller.is_open());
        assert_eq!(ids(controller.suggestions()), vec!["2", "3"]);
    }

    #[test]
    fn test_select_scenario_ann_bo() {
        let mut controller = AutocompleteController::new(vec![
            Candidate::new("1", "Ann", "ann@x.io", ""),
            Candidate::new("2", "Bo", "bo@x.io", ""),
        ]);
        controller.focus();
        assert_eq!(ids(controller.suggestions()), vec!["1", "2"]);

        assert!(controller.select("1"));
        assert_eq!(chip_ids(&controller), vec!["1"]);
        assert_eq!(ids(controller.suggestions()), vec!["2"]);
        assert_eq!(controller.query(), "");
        assert!(controller.is_open());
    }

    #[test]
    fn test_select_clears_query() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.type_query("car");
        assert!(controller.select("3"));
        assert_eq!(controller.query(), "");
        assert_eq!(ids(controller.suggestions()), vec!["1", "2"]);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        assert!(!controller.select("nope"));
        assert!(controller.chips().is_empty());
    }

    #[test]
    fn test_select_filtered_out_id_is_noop() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.type_query("Bob");
        assert!(!controller.select("1"));
        assert!(controller.chips().is_empty());
        assert_eq!(controller.query(), "Bob");
    }

    #[test]
    fn test_select_twice_creates_no_duplicate() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        assert!(controller.select("2"));
        assert!(!controller.select("2"));
        assert_eq!(chip_ids(&controller), vec!["2"]);
    }

    #[test]
    fn test_select_then_delete_round_trip() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        let before = controller.suggestions().to_vec();

        controller.select("2");
        let returned = controller.delete("2").unwrap();

        assert_eq!(returned.id, "2");
        assert!(controller.chips().is_empty());
        assert_eq!(controller.suggestions(), before.as_slice());
    }

    #[test]
    fn test_delete_middle_chip() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.select("2");
        controller.select("3");

        controller.delete("2");
        assert_eq!(chip_ids(&controller), vec!["1", "3"]);
        assert_eq!(ids(controller.suggestions()), vec!["2"]);
        assert_partitioned(&controller);
    }

    #[test]
    fn test_delete_unknown_chip_is_noop() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        assert!(controller.delete("3").is_none());
        assert_eq!(chip_ids(&controller), vec!["1"]);
    }

    #[test]
    fn test_delete_on_empty_sequence_is_noop() {
        let mut controller = AutocompleteController::new(people());
        assert!(controller.delete("1").is_none());
        assert_eq!(controller.suggestions().len(), 3);
    }

    #[test]
    fn test_backspace_arms_then_deletes() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.select("2");

        let outcome = controller.backspace();
        assert_eq!(outcome, BackspaceOutcome::Armed("2".to_string()));
        assert_eq!(controller.chips().len(), 2);
        assert!(controller.tail_highlighted());
        assert!(!controller.chips()[0].highlighted);

        let outcome = controller.backspace();
        assert!(matches!(outcome, BackspaceOutcome::Deleted(ref c) if c.id == "2"));
        assert_eq!(chip_ids(&controller), vec!["1"]);
        assert!(controller.suggestions().iter().any(|c| c.id == "2"));
    }

    #[test]
    fn test_backspace_with_query_is_text_edit_only() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.type_query("b");

        assert_eq!(controller.backspace(), BackspaceOutcome::Ignored);
        assert!(!controller.tail_highlighted());
        assert_eq!(controller.chips().len(), 1);
    }

    #[test]
    fn test_backspace_without_chips_is_noop() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        assert_eq!(controller.backspace(), BackspaceOutcome::Ignored);
    }

    #[test]
    fn test_new_tail_is_not_armed_after_delete() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.select("2");
        controller.backspace();
        controller.backspace();

        assert!(!controller.tail_highlighted());
        assert_eq!(
            controller.backspace(),
            BackspaceOutcome::Armed("1".to_string())
        );
    }

    #[test]
    fn test_select_disarms_previous_tail() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.backspace();
        assert!(controller.tail_highlighted());

        controller.select("2");
        assert!(controller.chips().iter().all(|chip| !chip.highlighted));
    }

    #[test]
    fn test_keep_highlight_on_change_option() {
        let options = ControllerOptions {
            keep_highlight_on_change: true,
            ..ControllerOptions::default()
        };
        let mut controller = AutocompleteController::with_options(people(), options);
        controller.focus();
        controller.select("1");
        controller.backspace();
        controller.select("2");

        assert!(controller.chips()[0].highlighted);
        assert!(!controller.tail_highlighted());
    }

    #[test]
    fn test_blur_keeps_chips_and_highlight() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.backspace();
        controller.blur_or_click_away();

        assert!(!controller.is_open());
        assert_eq!(controller.chips().len(), 1);
        assert!(controller.tail_highlighted());
        assert!(!controller.is_listening_for_click_away());
    }

    #[test]
    fn test_empty_query_restores_full_set() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("3");
        let baseline = controller.suggestions().to_vec();

        controller.type_query("Al");
        controller.type_query("zzz");
        controller.type_query("");
        assert_eq!(controller.suggestions(), baseline.as_slice());
    }

    #[test]
    fn test_partition_holds_across_operations() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        assert_partitioned(&controller);
        controller.type_query("o");
        assert_partitioned(&controller);
        controller.select("2");
        assert_partitioned(&controller);
        controller.type_query("a");
        assert_partitioned(&controller);
        controller.backspace();
        assert_partitioned(&controller);
        controller.type_query("");
        controller.backspace();
        controller.backspace();
        assert_partitioned(&controller);
        controller.delete("2");
        assert_partitioned(&controller);
        controller.blur_or_click_away();
        assert_partitioned(&controller);
    }

    #[test]
    fn test_click_away_scenario() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.type_query("xyz");

        assert_eq!(controller.click(&HitTarget::Outside), ClickOutcome::Dismissed);

        assert!(!controller.is_open());
        assert_eq!(controller.query(), "");
        assert_eq!(chip_ids(&controller), vec!["1"]);
    }

    #[test]
    fn test_chip_delete_click_does_not_dismiss() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.type_query("b");

        let outcome = controller.click(&HitTarget::ChipDelete("1".to_string()));

        assert!(matches!(outcome, ClickOutcome::Deleted(ref c) if c.id == "1"));
        assert!(controller.is_open());
        assert_eq!(controller.query(), "b");
        assert!(controller.chips().is_empty());
    }

    #[test]
    fn test_suggestion_click_selects_without_dismissing() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        let outcome = controller.click(&HitTarget::SuggestionRow("3".to_string()));
        assert!(matches!(outcome, ClickOutcome::Selected(ref c) if c.id == "3"));
        assert!(controller.is_open());
        assert_eq!(chip_ids(&controller), vec!["3"]);
    }

    #[test]
    fn test_input_click_focuses() {
        let mut controller = AutocompleteController::new(people());
        assert_eq!(controller.click(&HitTarget::InputContainer), ClickOutcome::Focused);
        assert!(controller.is_open());
    }

    #[test]
    fn test_outside_click_while_closed_is_noop() {
        let mut controller = AutocompleteController::new(people());
        controller.type_query("al");
        assert_eq!(controller.click(&HitTarget::Outside), ClickOutcome::Ignored);
        assert_eq!(controller.query(), "al");
    }

    #[test]
    fn test_position_captured_on_open() {
        let mut controller = AutocompleteController::new(people());
        let geometry = RecordingGeometry::new(Rect::new(4, 2, 30, 1));

        assert!(!controller.settle_layout(&geometry));
        assert_eq!(geometry.reads.get(), 0);

        controller.focus();
        assert!(controller.settle_layout(&geometry));
        assert_eq!(geometry.reads.get(), 1);
        assert_eq!(controller.position(), Some(OverlayPosition { top: 3, left: 4 }));

        assert!(!controller.settle_layout(&geometry));
        assert_eq!(geometry.reads.get(), 1);
    }

    #[test]
    fn test_position_requeried_after_chip_change() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.settle_layout(&Rect::new(1, 1, 10, 1));

        controller.select("1");
        assert!(controller.needs_layout());
        let moved = RecordingGeometry::new(Rect::new(9, 1, 10, 1));
        assert!(controller.settle_layout(&moved));
        assert_eq!(moved.reads.get(), 1);
        assert_eq!(controller.position(), Some(OverlayPosition { top: 2, left: 9 }));

        controller.delete("1");
        let back = RecordingGeometry::new(Rect::new(1, 1, 10, 1));
        assert!(controller.settle_layout(&back));
        assert_eq!(back.reads.get(), 1);
    }

    #[test]
    fn test_position_not_requeried_while_closed() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("1");
        controller.blur_or_click_away();
        controller.delete("1");

        let geometry = RecordingGeometry::new(Rect::new(0, 0, 10, 1));
        assert!(!controller.settle_layout(&geometry));
        assert_eq!(geometry.reads.get(), 0);
    }

    #[test]
    fn test_unmeasurable_input_skips_update() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();

        assert!(!controller.settle_layout(&None::<Rect>));
        assert_eq!(controller.position(), None);
        assert!(controller.needs_layout());

        assert!(controller.settle_layout(&Some(Rect::new(2, 2, 5, 1))));
        assert!(!controller.needs_layout());
    }

    #[test]
    fn test_click_on_stale_suggestion_is_ignored() {
        let mut controller = AutocompleteController::new(people());
        controller.focus();
        controller.select("2");
        let outcome = controller.click(&HitTarget::SuggestionRow("2".to_string()));
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(chip_ids(&controller), vec!["2"]);
    }

    #[test]
    fn test_invalidate_layout_only_while_open() {
        let mut controller = AutocompleteController::new(people());
        controller.invalidate_layout();
        assert!(!controller.needs_layout());

        controller.focus();
        controller.settle_layout(&Rect::new(0, 0, 10, 1));
        controller.invalidate_layout();
        assert!(controller.needs_layout());
    }

    #[test]
    fn test_custom_menu_offset() {
        let options = ControllerOptions {
            menu_offset: 3,
            ..ControllerOptions::default()
        };
        let mut controller = AutocompleteController::with_options(people(), options);
        controller.focus();
        controller.settle_layout(&Rect::new(0, 5, 10, 1));
        assert_eq!(controller.position(), Some(OverlayPosition { top: 8, left: 0 }));
    }
}
