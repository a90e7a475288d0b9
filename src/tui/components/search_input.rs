//! Query input component
//!
//! A bordered single-line text input writing straight into the `value` state.
//! The input always holds keyboard focus since it is the only text field on
//! screen; `has_focus` only drives the border color.

use iocraft::prelude::*;

use crate::tui::keymap::INPUT_HEIGHT;
use crate::tui::theme::theme;

pub const PLACEHOLDER: &str = "Jump to docs...";

/// Props for the SearchInput component
#[derive(Default, Props)]
pub struct SearchInputProps {
    /// State for the input text
    pub value: Option<State<String>>,
    /// Whether the widget is focused
    pub has_focus: bool,
}

/// Query input with a placeholder shown while empty
#[component]
pub fn SearchInput(props: &SearchInputProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(
                border_style: BorderStyle::Round,
                border_color: border_color,
                height: INPUT_HEIGHT,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let is_empty = value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: INPUT_HEIGHT,
            flex_shrink: 0.0,
        ) {
            View(margin_right: 1) {
                Text(content: ">", color: theme.highlight, weight: Weight::Bold)
            }
            View(
                flex_grow: if is_empty { 0.0 } else { 1.0 },
                min_width: 1,
            ) {
                TextInput(
                    value: value.to_string(),
                    has_focus: true,
                    on_change: move |new_value| value.set(new_value),
                    color: theme.text,
                )
            }
            #(if is_empty {
                Some(element! {
                    Text(content: PLACEHOLDER, color: theme.text_dimmed)
                })
            } else {
                None
            })
        }
    }
}
