//! Interactive jump command (`docjump jump`, the default)
//!
//! Starts the controller, hands its handle to the fullscreen widget, and once
//! the widget exits opens the chosen documentation page.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{DocJumpError, Result};
use crate::navigate::{Navigator, PrintOnly, SystemBrowser};
use crate::search::{Fetcher, SearchClient};
use crate::tui::{Controller, ControllerSettings, JumpWidget, Outcome, UiEvent};

/// Launch the jump widget
pub async fn cmd_jump(initial_query: Option<String>, print: bool) -> Result<()> {
    let config = Config::load()?;
    let client = SearchClient::from_config(&config)?;
    let settings = ControllerSettings::from_config(&config)?;

    let (controller, handle) = Controller::new(Fetcher::new(Arc::new(client)), settings);
    let controller_task = tokio::spawn(controller.run());

    let rendered = element! {
        JumpWidget(
            handle: Some(handle.clone()),
            initial_query: initial_query.unwrap_or_default(),
        )
    }
    .fullscreen()
    .await;

    // The widget can also exit on its own, e.g. on a render error
    handle.send(UiEvent::Quit);
    drop(handle);

    let outcome = controller_task
        .await
        .map_err(|e| DocJumpError::Other(format!("controller task failed: {e}")))?;
    rendered.map_err(|e| DocJumpError::Tui(e.to_string()))?;

    match outcome {
        Outcome::Navigate { url, result } => {
            tracing::info!("Navigating to {} ({url})", result.project_label());
            if print {
                PrintOnly.navigate(&url)
            } else {
                SystemBrowser.navigate(&url)
            }
        }
        Outcome::Cancelled => Ok(()),
    }
}
