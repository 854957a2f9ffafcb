//! Shared constants for wifi-dash.

/// Fixed number of records requested per listing page.
pub const PAGE_SIZE: usize = 20;

/// Default base URL of the telemetry API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Average latency (ms) above which latency is shown as degraded.
pub const LATENCY_ALERT_MS: f64 = 100.0;

/// Packet loss (%) above which loss is shown as degraded.
pub const PACKET_LOSS_ALERT_PCT: f64 = 5.0;
