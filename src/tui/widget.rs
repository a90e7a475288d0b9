//! Jump widget root component (`docjump jump`)
//!
//! Renders the query input, the result list and the shortcuts footer from the
//! latest controller snapshot, and forwards keyboard and mouse input to the
//! controller. The component never mutates selection state itself.

use iocraft::prelude::*;

use crate::search::QuerySeq;
use crate::tui::components::{Footer, ResultList, RowFormatter, SearchInput, jump_shortcuts};
use crate::tui::controller::{ControllerHandle, UiEvent};
use crate::tui::keymap::{Pointer, WidgetLayout, key_to_event, mouse_to_events};
use crate::tui::selection::{SelectionMode, SelectionState};

/// Props for the JumpWidget component
#[derive(Default, Props)]
pub struct JumpWidgetProps {
    /// Connection to a running controller
    pub handle: Option<ControllerHandle>,
    /// Text placed in the input on start
    pub initial_query: String,
    /// Row text strategy for the result list
    pub formatter: Option<RowFormatter>,
}

/// Layout:
/// ```text
/// +------------------------------------------+
/// | > query                                   |
/// +------------------------------------------+
///   > group/jar 1.2.3  description
///     group 0.1.0
/// [Up/Dn] Select ...                     1/12
/// ```
#[component]
pub fn JumpWidget<'a>(props: &JumpWidgetProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let query = hooks.use_state(|| props.initial_query.clone());
    let mut sent_query = hooks.use_state(String::new);
    let selection: State<SelectionState> = hooks.use_state(SelectionState::default);
    let should_exit = hooks.use_state(|| false);
    let mut started = hooks.use_state(|| false);

    let handle = props.handle.clone();

    // Mirror controller snapshots into render state until the controller ends
    let follow_handler: Handler<()> = hooks.use_async_handler({
        let handle = handle.clone();
        move |()| {
            let snapshots = handle.as_ref().map(ControllerHandle::subscribe);
            let mut selection_setter = selection;
            let mut should_exit_setter = should_exit;

            async move {
                if let Some(mut snapshots) = snapshots {
                    while snapshots.changed().await.is_ok() {
                        let snapshot = snapshots.borrow_and_update().clone();
                        selection_setter.set(snapshot);
                    }
                }
                should_exit_setter.set(true);
            }
        }
    });

    if !started.get() {
        started.set(true);
        if let Some(handle) = &handle {
            handle.send(UiEvent::Focus);
        }
        follow_handler(());
    }

    // Report edits; the controller sanitizes and debounces them
    let current_query = query.to_string();
    if current_query != *sent_query.read() {
        sent_query.set(current_query.clone());
        if let Some(handle) = &handle {
            handle.send(UiEvent::Input(current_query));
        }
    }

    let state = selection.read().clone();
    let layout = WidgetLayout::compute(
        height,
        state.is_list_visible(),
        state.selected_index(),
        state.results().len(),
    );

    hooks.use_terminal_events({
        let handle = handle.clone();
        move |event| {
            let Some(handle) = &handle else {
                return;
            };
            match event {
                TerminalEvent::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) if kind != KeyEventKind::Release => {
                    if let Some(ui_event) = key_to_event(code, modifiers) {
                        handle.send(ui_event);
                    }
                }
                TerminalEvent::FullscreenMouse(mouse_event) => {
                    if let Some(pointer) = Pointer::from_kind(mouse_event.kind) {
                        for ui_event in mouse_to_events(pointer, mouse_event.row, &layout) {
                            handle.send(ui_event);
                        }
                    }
                }
                _ => {}
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let status = match state.mode() {
        SelectionMode::FocusedWithResults => Some(format!(
            "{}/{}",
            state.selected_index() + 1,
            state.results().len()
        )),
        SelectionMode::FocusedEmpty if state.latest_dispatched() != QuerySeq::NONE => {
            Some("No results".to_string())
        }
        _ => None,
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
        ) {
            SearchInput(
                value: Some(query),
                has_focus: state.is_focused(),
            )

            #(if layout.rows > 0 {
                Some(element! {
                    ResultList(
                        results: state.results().clone(),
                        selected_index: state.selected_index(),
                        offset: layout.offset,
                        rows: layout.rows,
                        formatter: props.formatter,
                    )
                })
            } else {
                None
            })

            View(flex_grow: 1.0)

            Footer(shortcuts: jump_shortcuts(), status: status)
        }
    }
}
