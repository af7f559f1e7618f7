//! HTTP device client wrapping `gloo-net` for calls to the lamp endpoints.

use gloo_net::http::{Request, Response};
use lamphub_app::ports::{DeviceApi, read_response};
use lamphub_domain::command::{ControlResponse, LightCommand};
use lamphub_domain::distance::DistanceReading;
use lamphub_domain::endpoint::{BaseUrl, Endpoint, Method};
use lamphub_domain::error::DeviceError;
use lamphub_domain::log::LogsResponse;
use lamphub_domain::status::Status;
use serde::de::DeserializeOwned;
use web_sys::RequestMode;

/// [`DeviceApi`] talking to a device over `fetch`.
///
/// Requests are made in CORS mode since the dashboard is usually served
/// from another origin than the device.
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    base: BaseUrl,
}

impl HttpDeviceApi {
    pub fn new(base: BaseUrl) -> Self {
        Self { base }
    }

    async fn send(&self, endpoint: Endpoint) -> Result<Response, DeviceError> {
        let url = self.base.endpoint_url(endpoint);
        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        builder
            .mode(RequestMode::Cors)
            .send()
            .await
            .map_err(|err| DeviceError::Transport {
                endpoint,
                reason: err.to_string(),
            })
    }

    /// Call `endpoint` and decode the answer with [`read_response`].
    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, DeviceError> {
        let resp = self.send(endpoint).await?;
        let body = resp.binary().await.map_err(|err| DeviceError::Transport {
            endpoint,
            reason: err.to_string(),
        })?;
        read_response(endpoint, resp.status(), &resp.status_text(), &body)
    }
}

impl DeviceApi for HttpDeviceApi {
    async fn fetch_status(&self) -> Result<Status, DeviceError> {
        self.call(Endpoint::Status).await
    }

    async fn fetch_logs(&self) -> Result<LogsResponse, DeviceError> {
        self.call(Endpoint::Logs).await
    }

    async fn fetch_distance(&self) -> Result<DistanceReading, DeviceError> {
        self.call(Endpoint::Distance).await
    }

    async fn turn_on(&self) -> Result<ControlResponse, DeviceError> {
        self.call(LightCommand::TurnOn.endpoint()).await
    }

    async fn turn_off(&self) -> Result<ControlResponse, DeviceError> {
        self.call(LightCommand::TurnOff.endpoint()).await
    }
}
