//! Plain-text views over dashboard output.

use std::fmt::Write as _;

use wifi_dash_core::{PAGE_SIZE, Severity, SignalRecord};
use wifi_dash_dashboard::{ChartPoint, HouseReport, PageStats, RoomScorecard, ScoreBand, Snapshot};

fn opt(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

fn num(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.0}"))
}

fn timestamp(record: &SignalRecord) -> String {
    record.captured_at().map_or_else(
        || opt(record.timestamp.as_deref()).to_owned(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

pub(crate) fn stat_cards(stats: &PageStats) -> String {
    let latency_mark = if stats.latency_alert() { " !" } else { "" };
    let loss_mark = if stats.packet_loss_alert() { " !" } else { "" };
    format!(
        "Avg speed: {:.0} Mbps | Avg latency: {:.0} ms{latency_mark} | Max packet loss: %{}{loss_mark}",
        stats.display_speed(),
        stats.display_latency(),
        stats.max_packet_loss,
    )
}

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn sparkline(values: &[f64]) -> String {
    let (lo, hi) = bounds(values);
    let span = hi - lo;
    values
        .iter()
        .map(|v| {
            let level = if span > 0.0 { ((v - lo) / span * 7.0).round() } else { 3.0 };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "level is 0..=7")]
            let idx = level as usize;
            BARS.get(idx).copied().unwrap_or(' ')
        })
        .collect()
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
}

fn trend_row(out: &mut String, label: &str, unit: &str, values: &[f64]) {
    if values.is_empty() {
        return;
    }
    let (lo, hi) = bounds(values);
    let _ = writeln!(out, "  {label:<8} {}  {lo:.0}..{hi:.0} {unit}", sparkline(values));
}

/// Quality and signal strength trends of the page, oldest point first.
pub(crate) fn trend(chart: &[ChartPoint]) -> String {
    if chart.is_empty() {
        return String::new();
    }
    let speed: Vec<f64> = chart.iter().map(|p| p.link_speed_mbps).collect();
    let latency: Vec<f64> = chart.iter().map(|p| p.latency_ms).collect();
    let rssi: Vec<f64> = chart.iter().filter_map(|p| p.rssi).collect();

    let mut out = String::from("trend (oldest first)\n");
    trend_row(&mut out, "speed", "Mbps", &speed);
    trend_row(&mut out, "latency", "ms", &latency);
    trend_row(&mut out, "rssi", "dBm", &rssi);
    out
}

pub(crate) fn signal_table(records: &[SignalRecord]) -> String {
    let mut out = format!(
        "{:<19}  {:<10}  {:<12}  {:<12}  {:>6}  {:>6}  {:>5}  {:>5}\n",
        "TIME", "HOUSE", "ROOM", "NODE", "MBPS", "MS", "LOSS%", "RSSI"
    );
    if records.is_empty() {
        out.push_str("(no signals)\n");
        return out;
    }
    for r in records {
        let _ = writeln!(
            out,
            "{:<19}  {:<10}  {:<12}  {:<12}  {:>6}  {:>6}  {:>5}  {:>5}",
            timestamp(r),
            opt(r.house_id.as_deref()),
            opt(r.room.as_deref()),
            opt(r.device_id.as_deref()),
            num(r.link_speed_mbps),
            num(r.latency_ms),
            num(r.packet_loss_rate),
            num(r.rssi),
        );
    }
    out
}

pub(crate) fn page_footer(snapshot: &Snapshot) -> String {
    let state = &snapshot.state;
    let mut footer = format!(
        "page {} ({} rows, {PAGE_SIZE} per page) | filter: {}",
        state.page,
        state.records.len(),
        state.filter.as_deref().unwrap_or("all houses"),
    );
    if state.has_prev() {
        footer.push_str(" | [p]rev");
    }
    if state.has_next {
        footer.push_str(" | [n]ext");
    }
    if state.loading {
        footer.push_str(" | loading...");
    }
    if let Some(err) = &state.last_error {
        let _ = write!(footer, "\nlast request failed: {err}");
    }
    footer
}

pub(crate) fn snapshot(snapshot: &Snapshot) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        stat_cards(&snapshot.stats),
        trend(&snapshot.chart),
        signal_table(&snapshot.state.records),
        page_footer(snapshot)
    )
}

fn stars(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "clamped to 0..=5")]
    let filled = value.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn room_card(card: &RoomScorecard) -> String {
    let band = match card.band {
        ScoreBand::Good => "good",
        ScoreBand::Fair => "fair",
        ScoreBand::Poor => "poor",
    };
    let latency_mark = if card.latency_alert { " !" } else { "" };
    let mut out = format!(
        "== {} | score {:.0}/100 ({band})\n   gaming     {}\n   video call {}\n   streaming  {}\n   speed {:.0} Mbps | ping {:.0} ms{latency_mark}\n",
        card.room_name,
        card.overall_rating,
        stars(card.gaming_stars),
        stars(card.video_call_stars),
        stars(card.streaming_stars),
        card.avg_speed_mbps,
        card.avg_latency_ms,
    );
    match &card.advice {
        Some(advice) => {
            let level = if advice.severity == Severity::Critical { "CRITICAL" } else { "advice" };
            let _ = writeln!(
                out,
                "   [{level}] {}: {}",
                advice.action.as_deref().unwrap_or("Recommendation"),
                advice.text
            );
        },
        None => out.push_str("   infrastructure is running fine\n"),
    }
    out
}

pub(crate) fn house_report(report: &HouseReport) -> String {
    let mut out = format!(
        "{} performance report ({})\n",
        report.house_id,
        chrono::Local::now().format("%Y-%m-%d")
    );
    if let Some(advisory) = &report.advisory {
        let level = if advisory.is_critical() { "CRITICAL" } else { "summary" };
        let _ = writeln!(out, "[{level}] {}", advisory.text);
    }
    if report.rooms.is_empty() {
        out.push_str("no room metrics yet\n");
    }
    for card in &report.rooms {
        out.push('\n');
        out.push_str(&room_card(card));
    }
    out
}
