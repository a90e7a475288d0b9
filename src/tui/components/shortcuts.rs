//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add Up/Down and their Ctrl aliases
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("Up/Dn", "Select"));
        self.shortcuts.push(Shortcut::new("C-p/C-n", "Select"));
        self
    }

    /// Add Ctrl+q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("C-q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
