//! Wi-Fi signal records and the cursor-paginated listing contract.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::PAGE_SIZE;

/// Opaque continuation token returned by the listing endpoint.
///
/// Never inspected client-side; only echoed back to fetch the next page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One captured Wi-Fi measurement as returned by the listing endpoint.
///
/// Every field is optional on the wire. Numeric fields that are absent or
/// `null` count as zero wherever they are aggregated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalRecord {
    pub event_id: Option<String>,
    pub timestamp: Option<String>,
    pub house_id: Option<String>,
    pub room: Option<String>,
    /// Node identifier of the capturing device.
    pub device_id: Option<String>,
    pub link_speed_mbps: Option<f64>,
    pub latency_ms: Option<f64>,
    pub packet_loss_rate: Option<f64>,
    /// Received signal strength in dBm.
    pub rssi: Option<f64>,
    pub ssid: Option<String>,
    pub band: Option<String>,
    pub bssid: Option<String>,
}

impl SignalRecord {
    /// Link speed in Mbps, zero when absent.
    #[must_use]
    pub fn link_speed_or_zero(&self) -> f64 {
        self.link_speed_mbps.unwrap_or(0.0)
    }

    /// Latency in ms, zero when absent.
    #[must_use]
    pub fn latency_or_zero(&self) -> f64 {
        self.latency_ms.unwrap_or(0.0)
    }

    /// Packet loss in percent, zero when absent.
    #[must_use]
    pub fn packet_loss_or_zero(&self) -> f64 {
        self.packet_loss_rate.unwrap_or(0.0)
    }

    /// Capture time, accepting RFC 3339 as well as zone-less ISO 8601 (read as UTC).
    #[must_use]
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// One page of the listing endpoint: `{ "results": [...], "next_cursor": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalPage {
    #[serde(default)]
    pub results: Vec<SignalRecord>,
    /// `None` marks the end of the collection for the active filter.
    #[serde(default)]
    pub next_cursor: Option<Cursor>,
}

/// Parameters of a single listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub house_id: Option<String>,
    pub cursor: Option<Cursor>,
    pub limit: usize,
}

impl ListingQuery {
    /// Query for one fixed-size page under `house_id`, starting at `cursor`.
    #[must_use]
    pub fn page(house_id: Option<String>, cursor: Option<Cursor>) -> Self {
        Self { house_id, cursor, limit: PAGE_SIZE }
    }

    /// Query-string pairs; absent filter and cursor are omitted entirely.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];
        if let Some(house) = self.house_id.as_deref().filter(|h| !h.is_empty()) {
            params.push(("house_id", house.to_owned()));
        }
        if let Some(cursor) = &self.cursor {
            params.push(("cursor", cursor.as_str().to_owned()));
        }
        params
    }
}
