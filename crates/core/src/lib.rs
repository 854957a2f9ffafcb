//! Core types for wifi-dash
//!
//! Domain types shared by the HTTP client, the dashboard controller and the CLI.

mod constants;
mod env_config;
mod house;
mod signal;

pub use constants::*;
pub use env_config::*;
pub use house::*;
pub use signal::*;
