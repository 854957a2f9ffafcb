//! Typed errors for the dashboard controller.

use thiserror::Error;
use wifi_dash_client::ClientError;

/// Cursor cache invariant violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    /// A page was resolved (or appended to) before its predecessor was fetched.
    #[error("cursor index {index} out of range (cache holds {len} slots)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors surfaced by dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Network, timeout, non-2xx or undecodable response. Page state is left as it was.
    #[error("transport failure: {0}")]
    TransportFailure(#[from] ClientError),

    /// Navigation the cursor cache cannot serve. Raised before any request is sent.
    #[error("invalid page request: page {requested} from page {current} ({reason})")]
    InvalidPageRequest { requested: usize, current: usize, reason: &'static str },

    /// Internal cursor cache invariant violation.
    #[error("cursor cache: {0}")]
    Cursor(#[from] CursorError),
}

impl DashboardError {
    /// Whether the failure came from the transport (worth offering a retry).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }

    /// Whether the caller asked for a page it is not allowed to reach yet.
    #[must_use]
    pub const fn is_invalid_page(&self) -> bool {
        matches!(self, Self::InvalidPageRequest { .. })
    }
}
