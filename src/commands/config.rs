//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config get`: Print one value
//! - `config set`: Validate and save one value
//! - `config path`: Print the config file location

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{Config, DOCS_URL_ENV, SEARCH_URL_ENV};
use crate::error::Result;

/// Show current configuration, with environment overrides applied
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let config_path = Config::config_path()?;
    let search_url = config.search_url()?;
    let docs_url = config.docs_url()?;
    let log_path = config.log_path()?;

    let json_output = json!({
        "search_url": search_url.as_str(),
        "docs_url": docs_url.as_str(),
        "debounce_ms": config.debounce_ms,
        "blur_grace_ms": config.blur_grace_ms,
        "request_timeout_secs": config.request_timeout_secs,
        "connect_timeout_secs": config.connect_timeout_secs,
        "log_file": log_path.to_string_lossy(),
        "config_file": config_path.to_string_lossy(),
    });

    let overridden = |env: &str| {
        if std::env::var(env).is_ok_and(|v| !v.is_empty()) {
            format!(" {}", format!("(from {env})").dimmed())
        } else {
            String::new()
        }
    };

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!(
        "{}: {}{}\n",
        "search_url".cyan(),
        search_url,
        overridden(SEARCH_URL_ENV)
    ));
    text_output.push_str(&format!(
        "{}: {}{}\n",
        "docs_url".cyan(),
        docs_url,
        overridden(DOCS_URL_ENV)
    ));
    text_output.push_str(&format!("{}: {}\n", "debounce_ms".cyan(), config.debounce_ms));
    text_output.push_str(&format!(
        "{}: {}\n",
        "blur_grace_ms".cyan(),
        config.blur_grace_ms
    ));
    text_output.push_str(&format!(
        "{}: {}\n",
        "request_timeout_secs".cyan(),
        config.request_timeout_secs
    ));
    text_output.push_str(&format!(
        "{}: {}\n",
        "connect_timeout_secs".cyan(),
        config.connect_timeout_secs
    ));
    text_output.push_str(&format!("{}: {}\n", "log_file".cyan(), log_path.display()));
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", config_path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Get a specific configuration value as stored in the config file
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    let json_output = json!({
        "key": key,
        "value": value,
    });
    let text_output = value.unwrap_or_else(|| "not set".dimmed().to_string());

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    });
    let text_output = format!("Set {} to {}", key.cyan(), value);

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
