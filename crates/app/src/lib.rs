//! # lamphub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceApi`: the five HTTP calls a dashboard makes to the lamp
//!   - `Timer`: suspends a workflow for a fixed delay (settle wait)
//!   - `Lamp`: the device side of the contract, served over HTTP by the simulator
//! - Define the **dashboard state machine** (`DashboardState`): what the
//!   view shows, which buttons are enabled, how poll and command outcomes
//!   are applied
//! - Provide the **dashboard service** running the poll and command
//!   workflows against any `DeviceApi`
//!
//! ## Dependency rule
//! Depends on `lamphub-domain` only (plus `futures` for joining requests).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod dashboard;
pub mod ports;
pub mod services;
