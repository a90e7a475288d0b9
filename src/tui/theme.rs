//! Theme system for TUI colors and styles
//!
//! Colors line up with the plain CLI output of `docjump search`.

use iocraft::prelude::Color;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Result colors
    pub group: Color,
    pub version: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub selected_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            group: Color::Cyan,
            version: GRAY,

            border: GRAY,
            border_focused: Color::Blue,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            selected_background: Color::DarkBlue,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
