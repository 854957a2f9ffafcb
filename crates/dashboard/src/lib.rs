//! Dashboard controller for wifi-dash
//!
//! Owns the pagination state of the signal view: the cursor cache, the
//! epoch-tagged fetch orchestration, and the per-page aggregates that views
//! render. Also derives the per-room scorecards of the house detail view.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod aggregate;
mod controller;
mod cursor_cache;
mod dashboard;
mod error;
mod scorecard;
mod source;

#[cfg(test)]
mod dashboard_tests;
#[cfg(test)]
mod test_support;

pub use aggregate::{ChartPoint, PageStats, chart_series};
pub use controller::{FetchKind, FetchTicket, Outcome, PageController, PageState, Snapshot};
pub use cursor_cache::CursorCache;
pub use dashboard::Dashboard;
pub use error::{CursorError, DashboardError};
pub use scorecard::{Advice, GlobalAdvice, HouseReport, RoomScorecard, ScoreBand};
pub use source::SignalSource;
