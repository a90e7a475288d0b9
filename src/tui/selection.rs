//! Selection state machine over the current result set.
//!
//! Transitions are pure: [`reduce`] takes the state by value and returns the
//! next one, so every rule here is testable without a terminal or a runtime.
//! The controller owns the only live instance and applies one event at a time.

use crate::search::{QuerySeq, ResultSet, SearchResult};

/// Observable mode derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Unfocused,
    /// Focused with zero results
    FocusedEmpty,
    /// Focused with at least one result and one selected index
    FocusedWithResults,
}

/// Current result list, focus flag and selected index.
///
/// Invariant: when `results` is non-empty, `selected_index < results.len()`.
/// When it is empty the index is kept at 0 but nothing is rendered for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    results: ResultSet,
    selected_index: usize,
    focused: bool,
    /// Sequence of the most recently dispatched query
    latest_dispatched: QuerySeq,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Focus,
    Unfocus,
    /// Same as `Unfocus`, from the Escape key
    Escape,
    /// A query tagged `seq` has just been sent
    QueryDispatched(QuerySeq),
    ResultsArrived {
        seq: QuerySeq,
        results: ResultSet,
    },
    ArrowDown,
    ArrowUp,
    PointerOver(usize),
}

impl SelectionState {
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn latest_dispatched(&self) -> QuerySeq {
        self.latest_dispatched
    }

    pub fn mode(&self) -> SelectionMode {
        match (self.focused, self.results.is_empty()) {
            (false, _) => SelectionMode::Unfocused,
            (true, true) => SelectionMode::FocusedEmpty,
            (true, false) => SelectionMode::FocusedWithResults,
        }
    }

    /// Whether the rendering layer should draw the result list at all.
    pub fn is_list_visible(&self) -> bool {
        self.mode() == SelectionMode::FocusedWithResults
    }

    /// Whether a completion tagged `seq` belongs to the latest dispatched query.
    pub fn is_current(&self, seq: QuerySeq) -> bool {
        seq == self.latest_dispatched
    }

    /// The result `activate()` navigates to, if the selection points at one.
    pub fn activation_target(&self) -> Option<&SearchResult> {
        self.results.get(self.selected_index)
    }

    fn last_index(&self) -> Option<usize> {
        self.results.len().checked_sub(1)
    }
}

/// Apply one event to the state.
///
/// - Focus changes never touch the result set.
/// - Current results replace the set wholesale, reset the index to 0 and force
///   focus. Completions for anything but the latest dispatched query are
///   dropped, so a slow stale response cannot overwrite a fresher one.
/// - Arrow keys clamp at both ends (no wrap-around) and only act while
///   focused.
/// - Pointer hover wins over any keyboard-set index; indices outside the
///   current set are ignored.
pub fn reduce(mut state: SelectionState, event: SelectionEvent) -> SelectionState {
    match event {
        SelectionEvent::Focus => {
            state.focused = true;
        }
        SelectionEvent::Unfocus | SelectionEvent::Escape => {
            state.focused = false;
        }
        SelectionEvent::QueryDispatched(seq) => {
            state.latest_dispatched = state.latest_dispatched.max(seq);
        }
        SelectionEvent::ResultsArrived { seq, results } => {
            if state.is_current(seq) {
                state.results = results;
                state.selected_index = 0;
                state.focused = true;
            }
        }
        SelectionEvent::ArrowDown => {
            if state.focused
                && let Some(last) = state.last_index()
            {
                state.selected_index = (state.selected_index + 1).min(last);
            }
        }
        SelectionEvent::ArrowUp => {
            if state.focused {
                state.selected_index = state.selected_index.saturating_sub(1);
            }
        }
        SelectionEvent::PointerOver(index) => {
            if index < state.results.len() {
                state.selected_index = index;
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(n: usize) -> ResultSet {
        ResultSet::new(
            (0..n)
                .map(|i| SearchResult::new(format!("group{i}"), format!("jar{i}"), "1.0.0"))
                .collect(),
        )
    }

    /// Dispatch a query and deliver its results, like the controller does.
    fn deliver(state: SelectionState, set: ResultSet) -> SelectionState {
        let seq = state.latest_dispatched().next();
        let state = reduce(state, SelectionEvent::QueryDispatched(seq));
        reduce(state, SelectionEvent::ResultsArrived { seq, results: set })
    }

    fn apply_all(state: SelectionState, events: &[SelectionEvent]) -> SelectionState {
        events
            .iter()
            .cloned()
            .fold(state, |state, event| reduce(state, event))
    }

    #[test]
    fn test_initial_state_is_unfocused_and_empty() {
        let state = SelectionState::default();
        assert_eq!(state.mode(), SelectionMode::Unfocused);
        assert!(state.results().is_empty());
        assert_eq!(state.selected_index(), 0);
        assert!(!state.is_list_visible());
    }

    #[test]
    fn test_results_arrived_forces_focus_and_resets_index() {
        let state = deliver(SelectionState::default(), results(3));
        let state = reduce(state, SelectionEvent::ArrowDown);
        assert_eq!(state.selected_index(), 1);

        let state = reduce(state, SelectionEvent::Unfocus);
        let state = deliver(state, results(2));
        assert_eq!(state.mode(), SelectionMode::FocusedWithResults);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_empty_results_give_focused_empty() {
        let state = deliver(SelectionState::default(), ResultSet::empty());
        assert_eq!(state.mode(), SelectionMode::FocusedEmpty);
        assert!(!state.is_list_visible());
        assert!(state.activation_target().is_none());
    }

    #[test]
    fn test_focus_changes_preserve_results() {
        let state = deliver(SelectionState::default(), results(2));
        let state = reduce(state, SelectionEvent::Escape);
        assert_eq!(state.mode(), SelectionMode::Unfocused);
        assert_eq!(state.results().len(), 2);

        let state = reduce(state, SelectionEvent::Focus);
        assert_eq!(state.mode(), SelectionMode::FocusedWithResults);
        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn test_arrow_down_clamps_at_last_index() {
        let mut state = deliver(SelectionState::default(), results(3));
        for _ in 0..10 {
            state = reduce(state, SelectionEvent::ArrowDown);
            assert!(state.selected_index() <= 2);
        }
        assert_eq!(state.selected_index(), 2);
    }

    #[test]
    fn test_arrow_up_clamps_at_zero() {
        let mut state = deliver(SelectionState::default(), results(3));
        state = reduce(state, SelectionEvent::PointerOver(2));
        for _ in 0..10 {
            state = reduce(state, SelectionEvent::ArrowUp);
        }
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_arrows_are_noops_on_single_and_empty_sets() {
        let state = deliver(SelectionState::default(), results(1));
        let state = apply_all(state, &[SelectionEvent::ArrowDown, SelectionEvent::ArrowDown]);
        assert_eq!(state.selected_index(), 0);

        let state = deliver(state, ResultSet::empty());
        let state = apply_all(state, &[SelectionEvent::ArrowDown, SelectionEvent::ArrowUp]);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_arrows_ignored_while_unfocused() {
        let state = deliver(SelectionState::default(), results(3));
        let state = reduce(state, SelectionEvent::Unfocus);
        let state = reduce(state, SelectionEvent::ArrowDown);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_keyboard_continues_from_pointer_position() {
        let state = deliver(SelectionState::default(), results(3));
        let state = reduce(state, SelectionEvent::ArrowDown);
        assert_eq!(state.selected_index(), 1);

        let state = reduce(state, SelectionEvent::PointerOver(2));
        assert_eq!(state.selected_index(), 2);

        let state = reduce(state, SelectionEvent::ArrowUp);
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn test_pointer_over_outside_results_is_ignored() {
        let state = deliver(SelectionState::default(), results(2));
        let state = reduce(state, SelectionEvent::PointerOver(1));
        let state = reduce(state, SelectionEvent::PointerOver(7));
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn test_stale_results_are_dropped_regardless_of_arrival_order() {
        let first = QuerySeq::NONE.next();
        let second = first.next();
        let fresh = results(1);

        let state = apply_all(
            SelectionState::default(),
            &[
                SelectionEvent::QueryDispatched(first),
                SelectionEvent::QueryDispatched(second),
                SelectionEvent::ResultsArrived {
                    seq: second,
                    results: fresh.clone(),
                },
                SelectionEvent::ResultsArrived {
                    seq: first,
                    results: results(5),
                },
            ],
        );
        assert_eq!(state.results(), &fresh);
    }

    #[test]
    fn test_older_response_dropped_even_if_newer_never_arrives() {
        let first = QuerySeq::NONE.next();
        let second = first.next();
        let state = apply_all(
            SelectionState::default(),
            &[
                SelectionEvent::QueryDispatched(first),
                SelectionEvent::QueryDispatched(second),
                SelectionEvent::ResultsArrived {
                    seq: first,
                    results: results(4),
                },
            ],
        );
        assert!(state.results().is_empty());
        assert_eq!(state.mode(), SelectionMode::Unfocused);
    }

    #[test]
    fn test_dispatch_sequence_never_moves_backwards() {
        let third = QuerySeq::NONE.next().next().next();
        let state = reduce(SelectionState::default(), SelectionEvent::QueryDispatched(third));
        let state = reduce(state, SelectionEvent::QueryDispatched(QuerySeq::NONE.next()));
        assert_eq!(state.latest_dispatched(), third);
    }

    #[test]
    fn test_activation_target_follows_selection() {
        let state = deliver(SelectionState::default(), results(3));
        let state = reduce(state, SelectionEvent::ArrowDown);
        assert_eq!(state.activation_target().unwrap().group_name, "group1");
    }
}
