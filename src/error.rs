//! Error types for seo-audit.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for seo-audit operations.
pub type Result<T> = std::result::Result<T, SeoAuditError>;

/// Errors that can occur during seo-audit operations.
#[derive(Error, Debug)]
pub enum SeoAuditError {
    #[error("Invalid URL. Please enter a valid one. ({0})")]
    InvalidUrl(String),

    #[error("Could not fetch the webpage. Please check the URL and try again. ({0})")]
    FetchFailed(String),

    #[error("Setup failed at step(s): {0}")]
    SetupFailed(String),

    #[error("Lighthouse failed: {0}")]
    LighthouseFailed(String),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
