//! Tracing subscriber initialization.
//!
//! # Priority (highest to lowest)
//!
//! 1. `DOCJUMP_LOG` env var (per-target directives, e.g. `docjump=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. `--verbose` → debug
//! 4. Default level: `warn`
//!
//! The fullscreen widget owns the terminal, so it logs to a file. Every other
//! command logs to stderr.

use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::error::{DocJumpError, Result};

pub const LOG_ENV: &str = "DOCJUMP_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_subscriber(target: LogTarget, verbose: bool) -> Result<()> {
    let filter = build_env_filter(verbose);

    let installed = match target {
        LogTarget::Stderr => {
            let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(use_ansi)
                        .without_time()
                        .compact(),
                )
                .try_init()
        }
        LogTarget::File(path) => {
            let appender = file_appender(&path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
        }
    };

    installed.map_err(|e| DocJumpError::Other(format!("failed to initialize logging: {e}")))
}

/// Appender writing to exactly `path`, never rotated. Missing parent
/// directories are created.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(DocJumpError::Config(format!(
            "log file path '{}' has no file name",
            path.display()
        )));
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|e| DocJumpError::Other(format!("cannot open log file {}: {e}", path.display())))
}

fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(default_level(verbose).as_str())
}
