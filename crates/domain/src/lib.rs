//! # lamphub-domain
//!
//! Pure domain model for the lamphub light dashboard.
//!
//! ## Responsibilities
//! - Describe the records the lamp device speaks over HTTP
//!   ([`Status`](status::Status), [`LogEntry`](log::LogEntry),
//!   [`DistanceReading`](distance::DistanceReading),
//!   [`ControlResponse`](command::ControlResponse))
//! - Describe the device's endpoint table and validated base URL
//! - Hold the display rules shared by every front-end (state labels,
//!   time-of-day and duration formatting, history truncation)
//! - Define the error conventions used across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod command;
pub mod distance;
pub mod endpoint;
pub mod log;
pub mod status;

mod wire;
