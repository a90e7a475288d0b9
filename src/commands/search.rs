//! One-shot search command (`docjump search`)
//!
//! Runs the same sanitize and fetch steps as the widget, once, without
//! debouncing, and prints every result with its documentation URL.

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{DocJumpError, Result};
use crate::navigate::docs_url;
use crate::search::{SearchBackend, SearchClient, sanitize};

pub async fn cmd_search(words: &[String], limit: Option<usize>, json: bool) -> Result<()> {
    let query = sanitize(&words.join(" "));
    if query.is_blank() {
        return Err(DocJumpError::Other(
            "query is empty once brackets, braces and quotes are removed".to_string(),
        ));
    }

    let config = Config::load()?;
    let client = SearchClient::from_config(&config)?;
    let docs_base = config.docs_url()?;

    let results = client.search(&query).await?;
    let results = match limit {
        Some(limit) => results.truncated(limit),
        None => results,
    };
    tracing::debug!("{} result(s) for '{query}'", results.len());

    let mut rows = Vec::with_capacity(results.len());
    let mut text_output = String::new();
    for result in results.iter() {
        let url = docs_url(&docs_base, result)?;

        rows.push(json!({
            "group_name": result.group_name,
            "jar_name": result.jar_name,
            "version": result.version,
            "description": result.description,
            "url": url.as_str(),
        }));

        text_output.push_str(&format!(
            "{} {}\n",
            result.project_label().cyan(),
            result.version.dimmed()
        ));
        if let Some(description) = result.description.as_deref().map(str::trim)
            && !description.is_empty()
        {
            text_output.push_str(&format!("  {description}\n"));
        }
        text_output.push_str(&format!("  {}\n", url.as_str().blue()));
    }

    if results.is_empty() {
        text_output = format!("No results for '{query}'");
    } else {
        text_output.truncate(text_output.trim_end().len());
    }

    CommandOutput::new(json!({
        "query": query.as_str(),
        "results": rows,
    }))
    .with_text(text_output)
    .print(json)
}
