//! # lamphub-adapter-virtual
//!
//! Virtual lamp that emulates the microcontroller firmware, for local
//! development and end-to-end tests.
//!
//! ## Behaviour
//!
//! | Input | Effect |
//! |-------|--------|
//! | `TurnOn` while off | lamp on, manual mode on, activation counted, `on` log entry |
//! | `TurnOff` while on | lamp off, manual mode off, session time accumulated, `off` log entry |
//! | command matching current state | acknowledged, nothing changes |
//! | distance observation (automatic mode) | on below the presence threshold, off otherwise |
//!
//! Log timestamps and uptime count from construction, like the firmware's
//! `millis()` clock.
//!
//! ## Dependency rule
//!
//! Depends on `lamphub-app` (port traits) and `lamphub-domain` only.

mod lamp;
mod sensor;

pub use lamp::{LampConfig, VirtualLamp};
pub use sensor::{DistanceSweep, spawn_sweep};
