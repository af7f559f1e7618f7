//! Device port: the HTTP contract a dashboard uses to talk to the lamp.

use std::future::Future;

use lamphub_domain::command::{ControlResponse, LightCommand};
use lamphub_domain::distance::DistanceReading;
use lamphub_domain::endpoint::Endpoint;
use lamphub_domain::error::DeviceError;
use lamphub_domain::log::LogsResponse;
use lamphub_domain::status::Status;
use serde::de::DeserializeOwned;

/// Client for the lamp device's five endpoints.
///
/// Every call is stateless. Implementations map transport failures, non-2xx
/// answers and undecodable bodies onto [`DeviceError`] and never retry.
///
/// The returned futures are not required to be `Send`: the browser adapter
/// runs on a single-threaded event loop.
pub trait DeviceApi {
    /// `GET /status`
    fn fetch_status(&self) -> impl Future<Output = Result<Status, DeviceError>>;

    /// `GET /logs`
    fn fetch_logs(&self) -> impl Future<Output = Result<LogsResponse, DeviceError>>;

    /// `GET /distance`
    fn fetch_distance(&self) -> impl Future<Output = Result<DistanceReading, DeviceError>>;

    /// `POST /on`
    fn turn_on(&self) -> impl Future<Output = Result<ControlResponse, DeviceError>>;

    /// `POST /off`
    fn turn_off(&self) -> impl Future<Output = Result<ControlResponse, DeviceError>>;

    /// Dispatch `command` to [`turn_on`](Self::turn_on) or [`turn_off`](Self::turn_off).
    fn send(
        &self,
        command: LightCommand,
    ) -> impl Future<Output = Result<ControlResponse, DeviceError>> {
        async move {
            match command {
                LightCommand::TurnOn => self.turn_on().await,
                LightCommand::TurnOff => self.turn_off().await,
            }
        }
    }
}

/// Turn a raw HTTP answer from `endpoint` into the expected record.
///
/// Shared by every [`DeviceApi`] implementation so they agree on what a
/// failure is: the transport only has to deliver status and body.
///
/// # Errors
///
/// Returns [`DeviceError::Status`] when `status` is outside 2xx and
/// [`DeviceError::Decode`] when `body` is not valid JSON for `T`.
pub fn read_response<T: DeserializeOwned>(
    endpoint: Endpoint,
    status: u16,
    status_text: &str,
    body: &[u8],
) -> Result<T, DeviceError> {
    if !(200..300).contains(&status) {
        return Err(DeviceError::Status {
            endpoint,
            status,
            status_text: status_text.to_string(),
        });
    }
    serde_json::from_slice(body).map_err(|err| DeviceError::Decode {
        endpoint,
        reason: err.to_string(),
    })
}
