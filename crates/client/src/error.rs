//! Typed error enum for the client crate.

use thiserror::Error;

/// Errors from telemetry API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Whether the transport gave up waiting for the server.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpRequest(e) if e.is_timeout())
    }

    /// HTTP status code, when the server answered with a non-success status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}
