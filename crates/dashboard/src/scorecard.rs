//! Per-room scorecards for the house detail view.

use serde::Serialize;
use wifi_dash_core::{LATENCY_ALERT_MS, Recommendation, RoomMetrics, RoomRecommendation, Severity};

/// Colour band of an overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 80.0 {
            Self::Good
        } else if rating >= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Recommendation attached to a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub action: Option<String>,
    pub text: String,
    pub severity: Severity,
}

impl From<&RoomRecommendation> for Advice {
    fn from(rec: &RoomRecommendation) -> Self {
        Self { action: rec.action.clone(), text: rec.text.clone(), severity: rec.severity() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomScorecard {
    pub room_name: String,
    pub overall_rating: f64,
    pub band: ScoreBand,
    pub gaming_stars: f64,
    pub streaming_stars: f64,
    pub video_call_stars: f64,
    pub avg_speed_mbps: f64,
    pub avg_latency_ms: f64,
    pub latency_alert: bool,
    /// `None` when the report has nothing to say about this room.
    pub advice: Option<Advice>,
}

/// Scores are out of 100, stars out of 5.
fn stars(score: f64) -> f64 {
    (score / 20.0).clamp(0.0, 5.0)
}

impl RoomScorecard {
    #[must_use]
    pub fn from_metrics(metrics: &RoomMetrics, recommendation: Option<&Recommendation>) -> Self {
        Self {
            room_name: metrics.room_name.clone(),
            overall_rating: metrics.overall_rating,
            band: ScoreBand::from_rating(metrics.overall_rating),
            gaming_stars: stars(metrics.gaming_score),
            streaming_stars: stars(metrics.streaming_score),
            video_call_stars: stars(metrics.video_call_score),
            avg_speed_mbps: metrics.avg_speed_mbps,
            avg_latency_ms: metrics.avg_latency_ms,
            latency_alert: metrics.avg_latency_ms > LATENCY_ALERT_MS,
            advice: recommendation.and_then(|r| r.for_room(&metrics.room_name)).map(Advice::from),
        }
    }
}

/// Global advisory of a house report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalAdvice {
    pub text: String,
    pub severity: Severity,
    pub generated_at: Option<String>,
}

impl GlobalAdvice {
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseReport {
    pub house_id: String,
    pub advisory: Option<GlobalAdvice>,
    pub rooms: Vec<RoomScorecard>,
}

impl HouseReport {
    /// Scorecards in the order the metrics endpoint lists rooms.
    #[must_use]
    pub fn build(
        house_id: &str,
        metrics: &[RoomMetrics],
        recommendation: Option<&Recommendation>,
    ) -> Self {
        let advisory = recommendation.map(|r| GlobalAdvice {
            text: r.global_recommendation_text.clone(),
            severity: r.global_severity(),
            generated_at: r.generated_at.clone(),
        });
        let rooms = metrics.iter().map(|m| RoomScorecard::from_metrics(m, recommendation)).collect();
        Self { house_id: house_id.to_owned(), advisory, rooms }
    }
}
