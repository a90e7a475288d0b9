pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigate;
pub mod search;
pub mod tui;

pub use config::Config;
pub use error::{DocJumpError, Result};
pub use navigate::{Navigator, PrintOnly, SystemBrowser, docs_url};
pub use search::{
    Debouncer, Fetcher, Query, QuerySeq, ResultSet, SearchBackend, SearchClient, SearchResult,
    sanitize,
};
pub use tui::{Controller, ControllerHandle, ControllerSettings, Outcome, UiEvent};
