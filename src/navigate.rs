//! Destination URLs for search results and the ways of opening them.

use std::process::{Command, Stdio};

use url::Url;

use crate::error::{DocJumpError, Result};
use crate::search::SearchResult;

/// Resolve a result's documentation path, `/d/{group_name}/{jar_name}/{version}`,
/// against `base`.
///
/// Each name is pushed as its own path segment, so characters like `/` or `?`
/// inside a name are percent-encoded instead of changing the path structure.
pub fn docs_url(base: &Url, result: &SearchResult) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| {
            DocJumpError::InvalidUrl(base.to_string(), "cannot be a base URL".to_string())
        })?
        .pop_if_empty()
        .extend([
            "d",
            result.group_name.as_str(),
            result.jar_name.as_str(),
            result.version.as_str(),
        ]);
    Ok(url)
}

/// Performs the navigation once the widget has picked a destination.
pub trait Navigator {
    fn navigate(&self, url: &Url) -> Result<()>;
}

/// Opens the destination with the platform's default URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &Url) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url.as_str());
            cmd
        } else if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(url.as_str());
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url.as_str());
            cmd
        }
    }
}

impl Navigator for SystemBrowser {
    fn navigate(&self, url: &Url) -> Result<()> {
        let mut cmd = Self::command(url);
        let program = cmd.get_program().to_string_lossy().into_owned();

        let status = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| DocJumpError::Navigation(format!("failed to run '{program}': {e}")))?;

        if !status.success() {
            return Err(DocJumpError::Navigation(format!(
                "'{program}' exited with {status} while opening {url}"
            )));
        }

        tracing::debug!("Opened {url} with {program}");
        Ok(())
    }
}

/// Writes the destination to stdout instead of opening it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOnly;

impl Navigator for PrintOnly {
    fn navigate(&self, url: &Url) -> Result<()> {
        println!("{url}");
        Ok(())
    }
}
