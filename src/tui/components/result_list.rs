//! Result list component
//!
//! One row per result inside the visible window. Which row is highlighted
//! comes straight from the selection state; the list keeps no state of its own.

use iocraft::prelude::*;

use crate::search::{ResultSet, SearchResult};
use crate::tui::theme::theme;

/// Display text for one result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub label: String,
    pub version: String,
    pub detail: Option<String>,
}

/// Turns a result into row text. Swap it to change how rows read without
/// touching selection or layout.
pub type RowFormatter = fn(&SearchResult) -> RowText;

/// `group` or `group/jar`, the dimmed version, then the description if any.
pub fn default_row(result: &SearchResult) -> RowText {
    RowText {
        label: result.project_label(),
        version: result.version.clone(),
        detail: result
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    }
}

/// Props for the ResultList component
#[derive(Default, Props)]
pub struct ResultListProps {
    pub results: ResultSet,
    /// Index of the highlighted result
    pub selected_index: usize,
    /// Index of the first result to draw
    pub offset: usize,
    /// Number of rows to draw
    pub rows: usize,
    /// Row text strategy; [`default_row`] when unset
    pub formatter: Option<RowFormatter>,
}

#[component]
pub fn ResultList(props: &ResultListProps) -> impl Into<AnyElement<'static>> {
    let formatter = props.formatter.unwrap_or(default_row);
    let start = props.offset.min(props.results.len());
    let end = (start + props.rows).min(props.results.len());

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
        ) {
            #(props.results[start..end].iter().enumerate().map(|(i, result)| {
                element! {
                    ResultRow(
                        text: Some(formatter(result)),
                        is_selected: start + i == props.selected_index,
                    )
                }
            }))
        }
    }
}

/// Props for a single result row
#[derive(Default, Props)]
pub struct ResultRowProps {
    pub text: Option<RowText>,
    pub is_selected: bool,
}

/// Single result row
#[component]
pub fn ResultRow(props: &ResultRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(text) = props.text.clone() else {
        return element! { View(height: 1) };
    };

    let bg_color = props.is_selected.then_some(theme.selected_background);
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: theme.highlight, weight: Weight::Bold)
            }
            View(flex_shrink: 0.0) {
                Text(
                    content: text.label,
                    color: theme.group,
                    weight: if props.is_selected { Weight::Bold } else { Weight::Normal },
                )
            }
            View(flex_shrink: 0.0, margin_left: 1) {
                Text(content: text.version, color: theme.version)
            }
            #(text.detail.map(|detail| element! {
                View(flex_grow: 1.0, margin_left: 2, overflow: Overflow::Hidden) {
                    Text(content: detail, color: theme.text_dimmed)
                }
            }))
        }
    }
}
