use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocJumpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search endpoint returned {0}: {1}")]
    HttpStatus(u16, String),

    #[error("invalid URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DocJumpError>;
