//! House directory, per-room metrics and recommendation reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Entry of the house selector: `{ "value": house_id, "label": display_name }`.
///
/// The directory lists an "all houses" entry with an empty `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseOption {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl HouseOption {
    /// Listing filter selected by this entry; `None` means all houses.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        let value = self.value.trim();
        (!value.is_empty()).then_some(value)
    }

    /// Splits an `"owner - house type"` label. Labels without the separator
    /// are all owner.
    #[must_use]
    pub fn owner_and_kind(&self) -> (&str, Option<&str>) {
        match self.label.split_once(" - ") {
            Some((owner, kind)) => (owner.trim(), Some(kind.trim())),
            None => (self.label.trim(), None),
        }
    }
}

/// Latest computed performance of one room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomMetrics {
    pub house_id: String,
    pub room_name: String,
    pub gaming_score: f64,
    pub streaming_score: f64,
    pub video_call_score: f64,
    /// Overall rating out of 100.
    pub overall_rating: f64,
    pub avg_signal_dbm: f64,
    pub avg_speed_mbps: f64,
    pub avg_latency_ms: f64,
    pub packet_loss_avg: f64,
}

/// Advisory severity. Unknown labels are treated as informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Self::Critical,
            "WARNING" | "WARN" => Self::Warning,
            _ => Self::Info,
        }
    }
}

/// Advice for a single room inside a [`Recommendation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomRecommendation {
    pub action: Option<String>,
    pub text: String,
    pub severity: Option<String>,
}

impl RoomRecommendation {
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity.as_deref().map_or(Severity::Info, Severity::parse)
    }
}

/// Most recent recommendation report generated for a house.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub house_id: String,
    /// Keyed by room name.
    pub room_recommendations: BTreeMap<String, RoomRecommendation>,
    pub global_recommendation_text: String,
    pub global_severity: String,
    pub generated_at: Option<String>,
}

impl Recommendation {
    #[must_use]
    pub fn global_severity(&self) -> Severity {
        Severity::parse(&self.global_severity)
    }

    #[must_use]
    pub fn for_room(&self, room_name: &str) -> Option<&RoomRecommendation> {
        self.room_recommendations.get(room_name)
    }
}
