//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::keymap::FOOTER_HEIGHT;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "Enter", "C-q")
    pub key: String,
    /// Description of the action
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
    /// Right-aligned status text, e.g. the result count
    pub status: Option<String>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: FOOTER_HEIGHT,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
            #(props.status.clone().map(|status| element! {
                View(flex_grow: 1.0, justify_content: JustifyContent::End) {
                    Text(content: status, color: theme.text)
                }
            }))
        }
    }
}

/// Shortcuts for the jump widget
pub fn jump_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .add("Enter", "Open Docs")
        .add("Esc", "Hide")
        .with_quit()
        .build()
}
