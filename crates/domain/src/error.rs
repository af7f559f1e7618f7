//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

use crate::endpoint::Endpoint;

/// Failure talking to the lamp device.
///
/// Every variant names the endpoint involved so diagnostics can tell a
/// dead `/status` from a rejected `/on`. Front-ends collapse all of them
/// into a single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The request never produced a response (unreachable host, timeout,
    /// CORS rejection, …).
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: Endpoint, reason: String },

    /// The device answered outside the 2xx range.
    #[error("{endpoint} answered HTTP {status} {status_text}")]
    Status {
        endpoint: Endpoint,
        status: u16,
        status_text: String,
    },

    /// The body could not be decoded into the expected record.
    #[error("invalid {endpoint} response body: {reason}")]
    Decode { endpoint: Endpoint, reason: String },
}

impl DeviceError {
    /// Endpoint the failed request was aimed at.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }
}

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("base url must not be empty")]
    EmptyBaseUrl,
    #[error("base url must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),
    #[error("base url has no host")]
    MissingHost,
}
