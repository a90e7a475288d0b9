//! Command implementations for the `docjump` CLI.

mod config;
mod jump;
mod search;

pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use jump::cmd_jump;
pub use search::cmd_search;

use serde_json::Value;

use crate::error::Result;

/// A command's result, printable either as JSON or as human-readable text.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as pretty JSON when `json` is set, otherwise the text form.
    /// Falls back to JSON when no text form was given.
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}
