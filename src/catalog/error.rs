use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error type covering the different failure cases that can occur when the
/// client talks to the catalog endpoint or prepares data for it.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request did not complete within the configured bound.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The endpoint answered with a non-2xx status code.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Raised when the body is not valid JSON or not a valid envelope.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Raised when the envelope data is not a header-plus-rows table.
    #[error("malformed catalog table: {0}")]
    MalformedTable(String),

    /// The envelope was well formed but did not report success.
    #[error("{0}")]
    Application(String),

    /// Raised when a required product field is absent or blank.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Raised when the configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Raised when the user points at a config file that does not exist.
    #[error("config file not found: {0}")]
    MissingConfig(PathBuf),

    /// Wrapper for IO failures such as reading config or writing HTML.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl CatalogError {
    /// Plain-language description suitable for a notification surface.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Transport(_) => "Network error. Please check your connection.".into(),
            CatalogError::Timeout(_) => "Request timed out. Server might be busy.".into(),
            CatalogError::HttpStatus(code) => {
                format!("Server error ({code}). Please try again later.")
            }
            CatalogError::Parse(_) | CatalogError::MalformedTable(_) => {
                "Invalid response from server. Please try again.".into()
            }
            other => format!("Error: {other}"),
        }
    }
}
