//! Terminal input to widget events.
//!
//! Both mappings are pure functions so they can be unit tested without a
//! terminal. Mouse hit testing works on a [`WidgetLayout`] computed from the
//! same numbers the view renders with.

use iocraft::prelude::{KeyCode, KeyModifiers, MouseEventKind};

use super::controller::UiEvent;

/// Rows taken by the bordered input box at the top of the widget.
pub const INPUT_HEIGHT: u16 = 3;

/// Rows reserved for the shortcuts footer.
pub const FOOTER_HEIGHT: u16 = 1;

/// Map a key press to a widget event.
///
/// Plain characters return `None`; the text input consumes them and reports
/// the new text through its change handler.
pub fn key_to_event(code: KeyCode, modifiers: KeyModifiers) -> Option<UiEvent> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(UiEvent::Quit),
        KeyCode::Char('n') if ctrl => Some(UiEvent::ArrowDown),
        KeyCode::Char('p') if ctrl => Some(UiEvent::ArrowUp),
        KeyCode::Down => Some(UiEvent::ArrowDown),
        KeyCode::Up => Some(UiEvent::ArrowUp),
        KeyCode::Enter => Some(UiEvent::Enter),
        KeyCode::Esc => Some(UiEvent::Escape),
        _ => None,
    }
}

/// First visible row for a list of `len` rows showing at most `capacity`.
///
/// Keeps the selected row on screen by scrolling just far enough that it is
/// the last visible one.
pub fn window_offset(selected: usize, len: usize, capacity: usize) -> usize {
    if capacity == 0 || len <= capacity {
        return 0;
    }
    (selected + 1)
        .saturating_sub(capacity)
        .min(len - capacity)
}

/// Where things sit on screen for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetLayout {
    /// Index of the result drawn on the first list row
    pub offset: usize,
    /// Number of result rows actually drawn; 0 when the list is hidden
    pub rows: usize,
}

impl WidgetLayout {
    /// Layout for a terminal `height` rows tall.
    pub fn compute(height: u16, list_visible: bool, selected: usize, len: usize) -> Self {
        if !list_visible {
            return Self::default();
        }
        let capacity = height.saturating_sub(INPUT_HEIGHT + FOOTER_HEIGHT) as usize;
        let offset = window_offset(selected, len, capacity);
        Self {
            offset,
            rows: capacity.min(len - offset.min(len)),
        }
    }

    pub fn hit_test(&self, row: u16) -> Hit {
        if row < INPUT_HEIGHT {
            return Hit::Input;
        }
        let line = (row - INPUT_HEIGHT) as usize;
        if line < self.rows {
            Hit::Row(self.offset + line)
        } else {
            Hit::Outside
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    Row(usize),
    Outside,
}

/// The mouse actions the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Move,
    Press,
    ScrollUp,
    ScrollDown,
}

impl Pointer {
    pub fn from_kind(kind: MouseEventKind) -> Option<Self> {
        match kind {
            MouseEventKind::Moved => Some(Pointer::Move),
            MouseEventKind::Down(_) => Some(Pointer::Press),
            MouseEventKind::ScrollUp => Some(Pointer::ScrollUp),
            MouseEventKind::ScrollDown => Some(Pointer::ScrollDown),
            _ => None,
        }
    }
}

/// Map a mouse action at screen `row` to widget events, in order.
///
/// A press on a result row blurs the input before the click is delivered,
/// the same sequence a real pointer produces, and relies on the blur grace
/// period to keep the list alive until the click lands.
pub fn mouse_to_events(pointer: Pointer, row: u16, layout: &WidgetLayout) -> Vec<UiEvent> {
    match (pointer, layout.hit_test(row)) {
        (Pointer::Move, Hit::Row(index)) => vec![UiEvent::PointerOver(index)],
        (Pointer::Press, Hit::Input) => vec![UiEvent::Focus],
        (Pointer::Press, Hit::Row(index)) => vec![UiEvent::Blur, UiEvent::RowClicked(index)],
        (Pointer::Press, Hit::Outside) => vec![UiEvent::Blur],
        (Pointer::ScrollDown, Hit::Row(_)) => vec![UiEvent::ArrowDown],
        (Pointer::ScrollUp, Hit::Row(_)) => vec![UiEvent::ArrowUp],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_event_navigation() {
        assert_eq!(
            key_to_event(KeyCode::Down, KeyModifiers::NONE),
            Some(UiEvent::ArrowDown)
        );
        assert_eq!(
            key_to_event(KeyCode::Up, KeyModifiers::NONE),
            Some(UiEvent::ArrowUp)
        );
        assert_eq!(
            key_to_event(KeyCode::Char('n'), KeyModifiers::CONTROL),
            Some(UiEvent::ArrowDown)
        );
        assert_eq!(
            key_to_event(KeyCode::Char('p'), KeyModifiers::CONTROL),
            Some(UiEvent::ArrowUp)
        );
    }

    #[test]
    fn test_key_to_event_actions() {
        assert_eq!(
            key_to_event(KeyCode::Enter, KeyModifiers::NONE),
            Some(UiEvent::Enter)
        );
        assert_eq!(
            key_to_event(KeyCode::Esc, KeyModifiers::NONE),
            Some(UiEvent::Escape)
        );
        assert_eq!(
            key_to_event(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(UiEvent::Quit)
        );
        assert_eq!(
            key_to_event(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_key_to_event_leaves_text_to_the_input() {
        assert_eq!(key_to_event(KeyCode::Char('q'), KeyModifiers::NONE), None);
        assert_eq!(key_to_event(KeyCode::Char('n'), KeyModifiers::NONE), None);
        assert_eq!(key_to_event(KeyCode::Backspace, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_window_offset_scrolls_just_enough() {
        assert_eq!(window_offset(0, 20, 5), 0);
        assert_eq!(window_offset(4, 20, 5), 0);
        assert_eq!(window_offset(5, 20, 5), 1);
        assert_eq!(window_offset(19, 20, 5), 15);
        assert_eq!(window_offset(3, 3, 5), 0);
        assert_eq!(window_offset(3, 10, 0), 0);
    }

    #[test]
    fn test_layout_hidden_list_has_no_rows() {
        let layout = WidgetLayout::compute(24, false, 0, 10);
        assert_eq!(layout.rows, 0);
        assert_eq!(layout.hit_test(INPUT_HEIGHT), Hit::Outside);
    }

    #[test]
    fn test_layout_hit_test_maps_rows_through_offset() {
        // 10 rows: 3 input, 6 list, 1 footer
        let layout = WidgetLayout::compute(10, true, 8, 12);
        assert_eq!(layout, WidgetLayout { offset: 3, rows: 6 });
        assert_eq!(layout.hit_test(0), Hit::Input);
        assert_eq!(layout.hit_test(2), Hit::Input);
        assert_eq!(layout.hit_test(3), Hit::Row(3));
        assert_eq!(layout.hit_test(8), Hit::Row(8));
        assert_eq!(layout.hit_test(9), Hit::Outside);
    }

    #[test]
    fn test_layout_short_list() {
        let layout = WidgetLayout::compute(24, true, 1, 2);
        assert_eq!(layout, WidgetLayout { offset: 0, rows: 2 });
        assert_eq!(layout.hit_test(4), Hit::Row(1));
        assert_eq!(layout.hit_test(5), Hit::Outside);
    }

    #[test]
    fn test_mouse_press_on_row_blurs_then_clicks() {
        let layout = WidgetLayout::compute(24, true, 0, 3);
        assert_eq!(
            mouse_to_events(Pointer::Press, 4, &layout),
            vec![UiEvent::Blur, UiEvent::RowClicked(1)]
        );
    }

    #[test]
    fn test_mouse_press_elsewhere() {
        let layout = WidgetLayout::compute(24, true, 0, 3);
        assert_eq!(
            mouse_to_events(Pointer::Press, 1, &layout),
            vec![UiEvent::Focus]
        );
        assert_eq!(
            mouse_to_events(Pointer::Press, 20, &layout),
            vec![UiEvent::Blur]
        );
    }

    #[test]
    fn test_mouse_hover_selects_row() {
        let layout = WidgetLayout::compute(24, true, 0, 3);
        assert_eq!(
            mouse_to_events(Pointer::Move, 5, &layout),
            vec![UiEvent::PointerOver(2)]
        );
        assert!(mouse_to_events(Pointer::Move, 1, &layout).is_empty());
        assert!(mouse_to_events(Pointer::Move, 6, &layout).is_empty());
    }
}
