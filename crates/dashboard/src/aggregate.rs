//! Summary statistics over the currently displayed page.
//!
//! Aggregates describe exactly the loaded page, not the whole filtered
//! collection. Missing numeric fields count as zero.

use serde::Serialize;
use wifi_dash_core::{LATENCY_ALERT_MS, PACKET_LOSS_ALERT_PCT, SignalRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PageStats {
    pub avg_speed_mbps: f64,
    pub avg_latency_ms: f64,
    pub max_packet_loss: f64,
}

impl PageStats {
    #[must_use]
    pub fn from_records(records: &[SignalRecord]) -> Self {
        Self {
            avg_speed_mbps: average(records, SignalRecord::link_speed_or_zero),
            avg_latency_ms: average(records, SignalRecord::latency_or_zero),
            max_packet_loss: maximum(records, SignalRecord::packet_loss_or_zero),
        }
    }

    /// Average speed as shown on the stat card.
    #[must_use]
    pub fn display_speed(&self) -> f64 {
        self.avg_speed_mbps.round()
    }

    /// Average latency as shown on the stat card.
    #[must_use]
    pub fn display_latency(&self) -> f64 {
        self.avg_latency_ms.round()
    }

    #[must_use]
    pub fn latency_alert(&self) -> bool {
        self.display_latency() > LATENCY_ALERT_MS
    }

    #[must_use]
    pub fn packet_loss_alert(&self) -> bool {
        self.max_packet_loss > PACKET_LOSS_ALERT_PCT
    }
}

fn average(records: &[SignalRecord], field: impl Fn(&SignalRecord) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss, reason = "page sizes are tiny")]
    let count = records.len() as f64;
    records.iter().map(field).sum::<f64>() / count
}

fn maximum(records: &[SignalRecord], field: impl Fn(&SignalRecord) -> f64) -> f64 {
    records.iter().map(field).reduce(f64::max).unwrap_or(0.0)
}

/// One point of the quality and signal strength charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: Option<String>,
    pub room: Option<String>,
    pub link_speed_mbps: f64,
    pub latency_ms: f64,
    pub packet_loss_rate: f64,
    pub rssi: Option<f64>,
}

/// Chart series in chronological order. The listing is newest-first.
#[must_use]
pub fn chart_series(records: &[SignalRecord]) -> Vec<ChartPoint> {
    records
        .iter()
        .rev()
        .map(|r| ChartPoint {
            timestamp: r.timestamp.clone(),
            room: r.room.clone(),
            link_speed_mbps: r.link_speed_or_zero(),
            latency_ms: r.latency_or_zero(),
            packet_loss_rate: r.packet_loss_or_zero(),
            rssi: r.rssi,
        })
        .collect()
}
