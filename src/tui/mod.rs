//! TUI module for the interactive jump widget
//!
//! - `selection` - the pure selection state machine
//! - `controller` - the event loop that owns widget state and timers
//! - `keymap` - terminal input to widget events, plus layout hit testing
//! - `widget` - the iocraft root component

pub mod components;
pub mod controller;
pub mod keymap;
pub mod selection;
pub mod theme;
pub mod widget;

pub use controller::{Controller, ControllerHandle, ControllerSettings, Outcome, UiEvent};
pub use selection::{SelectionEvent, SelectionMode, SelectionState, reduce};
pub use theme::Theme;
pub use widget::{JumpWidget, JumpWidgetProps};
