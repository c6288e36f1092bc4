use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::catalog::error::Result;

/// Deployment endpoint used when no other endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwkKhU-Pp5L-nqiQej2xU611DDkvSP1fR1niTxe49bZarIw457jdRJ9spoaRjyBt2Pwmg/exec";

/// Image reference stored when a product has no usable image.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Host whose sharing links get rewritten into direct-view links.
pub const DEFAULT_SHARING_HOST: &str = "drive.google.com";

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Settings handed to [`CatalogClient`](crate::catalog::io::http::CatalogClient)
/// at construction time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Remote catalog endpoint serving both GET and POST.
    pub endpoint: String,
    /// Upper bound for a single request, in milliseconds.
    pub timeout_ms: u64,
    /// Emit request and response payloads at debug level.
    pub verbose: bool,
    pub placeholder_image: String,
    pub sharing_host: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            verbose: false,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            sharing_host: DEFAULT_SHARING_HOST.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at the given endpoint with defaults
    /// for everything else.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parses the configured endpoint.
    pub fn endpoint_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.endpoint)?)
    }
}
