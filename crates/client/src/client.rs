use std::time::Duration;

use serde::de::DeserializeOwned;
use wifi_dash_core::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, env_parse_with_default, env_string};

use crate::error::ClientError;

/// Maximum error body length kept in [`ClientError::HttpStatus`].
pub(crate) const MAX_ERROR_BODY_LEN: usize = 500;

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Reads `WIFI_DASH_API_URL` and `WIFI_DASH_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env_string("WIFI_DASH_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let timeout_secs = env_parse_with_default("WIFI_DASH_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        Self { base_url, timeout: Duration::from_secs(timeout_secs) }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the telemetry API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: reqwest::Url,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is not a usable `http(s)` base, or if
    /// the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = reqwest::Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::ClientInit(format!("invalid API URL {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::ClientInit(format!("API URL {} cannot have paths", config.base_url)));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Endpoint URL below the base path, with a trailing slash. Each segment is
    /// percent-encoded, so `/`, `?` or `#` inside an id stay in its segment.
    pub(crate) fn url(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }

    /// Sends a GET and returns the raw response once its status is a success.
    pub(crate) async fn get_ok(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<reqwest::Response, ClientError> {
        let url = self.url(segments);
        tracing::debug!(%url, ?params, "GET");
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
        Err(ClientError::HttpStatus {
            code: status.as_u16(),
            body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
        })
    }

    /// Decodes a successful response body, keeping a snippet of it on failure.
    pub(crate) async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        what: &str,
    ) -> Result<T, ClientError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::JsonParse {
            context: format!("{what} (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
