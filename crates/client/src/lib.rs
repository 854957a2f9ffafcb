//! HTTP client for the wifi-dash telemetry API
//!
//! Wraps the signal listing, house directory, room metrics and
//! recommendation endpoints. Requests are never retried here; callers decide.

mod client;
mod endpoints;
mod error;


pub use client::{ApiClient, ClientConfig, truncate};
pub use error::ClientError;
