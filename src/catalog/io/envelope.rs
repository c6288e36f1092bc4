use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::error::{CatalogError, Result};

pub const STATUS_SUCCESS: &str = "success";

/// `{status, data?, message?}` wrapper used by both read and write responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Parses a response body. Anything that is not a JSON object carrying a
    /// string `status` is rejected.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Message reported by the endpoint, or a generic one when it sent none.
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("Unknown error")
    }

    /// Turns a non-success envelope into [`CatalogError::Application`].
    pub fn into_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CatalogError::Application(self.message_or_default().to_string()))
        }
    }
}
