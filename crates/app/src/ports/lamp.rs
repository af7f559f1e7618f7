//! Lamp port: the device side of the HTTP contract.
//!
//! Implemented by the simulated lamp and served by the axum adapter, so the
//! dashboard can be exercised without the real microcontroller.

use lamphub_domain::command::{ControlResponse, LightCommand};
use lamphub_domain::distance::DistanceReading;
use lamphub_domain::log::LogsResponse;
use lamphub_domain::status::Status;

/// A lamp device answering the five endpoints.
///
/// All operations work on in-memory state and cannot fail.
pub trait Lamp: Send + Sync {
    /// Snapshot for `GET /status`.
    fn status(&self) -> Status;

    /// History for `GET /logs`, in the order the device reports it.
    fn logs(&self) -> LogsResponse;

    /// Reading for `GET /distance`.
    fn distance(&self) -> DistanceReading;

    /// Apply a manual command (`POST /on`, `POST /off`).
    fn apply(&self, command: LightCommand) -> ControlResponse;
}

impl<T: Lamp> Lamp for std::sync::Arc<T> {
    fn status(&self) -> Status {
        (**self).status()
    }

    fn logs(&self) -> LogsResponse {
        (**self).logs()
    }

    fn distance(&self) -> DistanceReading {
        (**self).distance()
    }

    fn apply(&self, command: LightCommand) -> ControlResponse {
        (**self).apply(command)
    }
}
