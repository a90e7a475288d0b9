//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config directory
//! (or wherever `DOCJUMP_CONFIG` points) and includes:
//! - The search endpoint and the documentation site
//! - Debounce and blur grace periods for the widget
//! - HTTP timeouts
//! - The log file used while the fullscreen TUI owns the terminal

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DocJumpError, Result};

pub const CONFIG_ENV: &str = "DOCJUMP_CONFIG";
pub const SEARCH_URL_ENV: &str = "DOCJUMP_SEARCH_URL";
pub const DOCS_URL_ENV: &str = "DOCJUMP_DOCS_URL";

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "search_url",
    "docs_url",
    "debounce_ms",
    "blur_grace_ms",
    "request_timeout_secs",
    "connect_timeout_secs",
    "log_file",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Search endpoint queried as `GET {search_url}?q=...&format=json`
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Base URL that `/d/{group}/{artifact}/{version}` paths are resolved against
    #[serde(default = "default_docs_url")]
    pub docs_url: String,

    /// Quiet period after the last keystroke before a query is sent (default: 300)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Delay between losing focus and hiding the result list (default: 200)
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,

    /// Total timeout for one search request in seconds (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connect timeout for one search request in seconds (default: 5)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Log file for the interactive widget (default: `<data dir>/docjump.log`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_search_url() -> String {
    "https://clojars.org/search".to_string()
}

fn default_docs_url() -> String {
    "https://cljdoc.org".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_blur_grace_ms() -> u64 {
    200
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            docs_url: default_docs_url(),
            debounce_ms: default_debounce_ms(),
            blur_grace_ms: default_blur_grace_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_file: None,
        }
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "docjump", "docjump").ok_or_else(|| {
        DocJumpError::Config("could not determine a home directory for docjump".to_string())
    })
}

fn parse_url(value: &str) -> Result<Url> {
    let url =
        Url::parse(value).map_err(|e| DocJumpError::InvalidUrl(value.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DocJumpError::InvalidUrl(
            value.to_string(),
            "expected an http or https URL".to_string(),
        ));
    }
    Ok(url)
}

fn parse_u64(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        DocJumpError::Config(format!("invalid value '{value}' for {key}: expected a number"))
    })
}

/// Read an environment override, ignoring empty values.
fn env_override(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = env_override(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(project_dirs()?.config_dir().join("config.yaml"))
    }

    /// Default location of the interactive log file
    pub fn default_log_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_local_dir().join("docjump.log"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DocJumpError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DocJumpError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            DocJumpError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Check that URLs parse and timeouts are usable
    pub fn validate(&self) -> Result<()> {
        parse_url(&self.search_url)?;
        parse_url(&self.docs_url)?;
        if self.request_timeout_secs == 0 {
            return Err(DocJumpError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(DocJumpError::Config(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Search endpoint, from `DOCJUMP_SEARCH_URL` or the config file
    pub fn search_url(&self) -> Result<Url> {
        match env_override(SEARCH_URL_ENV) {
            Some(url) => parse_url(&url),
            None => parse_url(&self.search_url),
        }
    }

    /// Documentation base URL, from `DOCJUMP_DOCS_URL` or the config file
    pub fn docs_url(&self) -> Result<Url> {
        match env_override(DOCS_URL_ENV) {
            Some(url) => parse_url(&url),
            None => parse_url(&self.docs_url),
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Log file for the interactive widget
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Self::default_log_path(),
        }
    }

    /// Read a single value by key, as shown by `config get`
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "search_url" => Some(self.search_url.clone()),
            "docs_url" => Some(self.docs_url.clone()),
            "debounce_ms" => Some(self.debounce_ms.to_string()),
            "blur_grace_ms" => Some(self.blur_grace_ms.to_string()),
            "request_timeout_secs" => Some(self.request_timeout_secs.to_string()),
            "connect_timeout_secs" => Some(self.connect_timeout_secs.to_string()),
            "log_file" => self.log_file.as_ref().map(|p| p.display().to_string()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a single value by key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "search_url" => {
                parse_url(value)?;
                next.search_url = value.to_string();
            }
            "docs_url" => {
                parse_url(value)?;
                next.docs_url = value.to_string();
            }
            "debounce_ms" => next.debounce_ms = parse_u64(key, value)?,
            "blur_grace_ms" => next.blur_grace_ms = parse_u64(key, value)?,
            "request_timeout_secs" => next.request_timeout_secs = parse_u64(key, value)?,
            "connect_timeout_secs" => next.connect_timeout_secs = parse_u64(key, value)?,
            "log_file" => {
                next.log_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(unknown_key(key)),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn unknown_key(key: &str) -> DocJumpError {
    DocJumpError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.search_url, "https://clojars.org/search");
        assert_eq!(config.docs_url, "https://cljdoc.org");
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
        assert_eq!(config.blur_grace(), Duration::from_millis(200));
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
debounce_ms: 150
docs_url: http://localhost:8000
"#;
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.docs_url, "http://localhost:8000");
        assert_eq!(config.search_url, default_search_url());
        assert_eq!(config.blur_grace_ms, 200);
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.set("debounce_ms", "120").unwrap();
        config.set("log_file", "/tmp/docjump-test.log").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.debounce_ms, 120);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_invalid_url_in_file_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "search_url: not a url\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(DocJumpError::InvalidUrl(_, _))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("debounce_ms", "soon").is_err());
        assert!(config.set("docs_url", "ftp://example.com").is_err());
        assert!(config.set("request_timeout_secs", "0").is_err());
        assert!(matches!(
            config.set("colour", "blue"),
            Err(DocJumpError::Config(_))
        ));
    }

    #[test]
    fn test_get_reads_values() {
        let config = Config::default();
        assert_eq!(
            config.get("blur_grace_ms").unwrap(),
            Some("200".to_string())
        );
        assert_eq!(config.get("log_file").unwrap(), None);
        assert!(config.get("nope").is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_urls() {
        let config = Config::default();

        // SAFETY: serialized with the other environment-touching tests.
        unsafe { env::set_var(SEARCH_URL_ENV, "http://127.0.0.1:9999/search") };
        let url = config.search_url();
        unsafe { env::remove_var(SEARCH_URL_ENV) };

        assert_eq!(url.unwrap().as_str(), "http://127.0.0.1:9999/search");
        assert_eq!(
            config.search_url().unwrap().as_str(),
            "https://clojars.org/search"
        );
    }

    #[test]
    #[serial]
    fn test_empty_env_override_is_ignored() {
        let config = Config::default();

        // SAFETY: serialized with the other environment-touching tests.
        unsafe { env::set_var(DOCS_URL_ENV, "") };
        let url = config.docs_url();
        unsafe { env::remove_var(DOCS_URL_ENV) };

        assert_eq!(url.unwrap().as_str(), "https://cljdoc.org/");
    }
}
