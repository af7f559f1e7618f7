//! Manual on/off commands and their acknowledgement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::status::LightState;

/// A manual command a user can send to the lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightCommand {
    TurnOn,
    TurnOff,
}

impl LightCommand {
    /// Endpoint that carries this command.
    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::TurnOn => Endpoint::On,
            Self::TurnOff => Endpoint::Off,
        }
    }

    /// State the lamp should be in once the command is applied.
    #[must_use]
    pub fn target(self) -> LightState {
        match self {
            Self::TurnOn => LightState::On,
            Self::TurnOff => LightState::Off,
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TurnOn => "Ligar",
            Self::TurnOff => "Desligar",
        }
    }
}

impl fmt::Display for LightCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnOn => f.write_str("turn_on"),
            Self::TurnOff => f.write_str("turn_off"),
        }
    }
}

/// Body returned by `POST /on` and `POST /off`.
///
/// Dashboards log `message` but keep displaying the last polled status;
/// `is_on` is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlResponse {
    pub success: bool,
    pub message: String,
    pub is_on: bool,
}
