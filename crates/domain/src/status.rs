//! Device status snapshot and the on/off light state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wire::whole_number;

/// Whether the lamp is lit.
///
/// Also used as the `type` tag of activation log entries (`"on"` / `"off"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    On,
    #[default]
    Off,
}

impl LightState {
    #[must_use]
    pub fn from_is_on(is_on: bool) -> Self {
        if is_on { Self::On } else { Self::Off }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Label shown to the user.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "Ligada",
            Self::Off => "Desligada",
        }
    }

    /// Wire/CSS token (`"on"` / `"off"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot returned by `GET /status`.
///
/// Produced entirely by the device. Clients replace their copy wholesale on
/// every poll and never merge two snapshots. Bodies are taken as they
/// come: missing fields read as their default and counters accept any JSON
/// number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    /// Current lamp state.
    pub is_on: bool,
    /// Number of times the lamp was switched on since boot.
    #[serde(deserialize_with = "whole_number")]
    pub total_activations: u64,
    /// Seconds spent lit since boot.
    #[serde(deserialize_with = "whole_number")]
    pub total_time_on: u64,
    /// Seconds since the device booted.
    #[serde(deserialize_with = "whole_number")]
    pub uptime: u64,
    /// Latest distance sensor reading, in centimetres.
    pub current_distance: f64,
    /// Whether the lamp is under manual control (sensor ignored).
    pub manual_mode: bool,
    /// Mean seconds lit per activation.
    pub average_time_on: f64,
    /// Seconds the current session has lasted, 0 when off.
    #[serde(deserialize_with = "whole_number")]
    pub current_session_duration: u64,
}

impl Status {
    #[must_use]
    pub fn light_state(&self) -> LightState {
        LightState::from_is_on(self.is_on)
    }
}
