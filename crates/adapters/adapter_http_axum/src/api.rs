//! JSON handlers for the lamp device endpoints.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};

use lamphub_app::ports::Lamp;
use lamphub_domain::command::{ControlResponse, LightCommand};
use lamphub_domain::distance::DistanceReading;
use lamphub_domain::endpoint::Endpoint;
use lamphub_domain::log::LogsResponse;
use lamphub_domain::status::Status;

use crate::state::DeviceState;

/// Build the device sub-router, one route per [`Endpoint`].
pub fn routes<L>() -> Router<DeviceState<L>>
where
    L: Lamp + 'static,
{
    Router::new()
        .route(Endpoint::Status.path(), get(status::<L>))
        .route(Endpoint::Logs.path(), get(logs::<L>))
        .route(Endpoint::Distance.path(), get(distance::<L>))
        .route(Endpoint::On.path(), post(turn_on::<L>))
        .route(Endpoint::Off.path(), post(turn_off::<L>))
}

/// `GET /status`
pub async fn status<L: Lamp + 'static>(State(state): State<DeviceState<L>>) -> Json<Status> {
    Json(state.lamp.status())
}

/// `GET /logs`
pub async fn logs<L: Lamp + 'static>(State(state): State<DeviceState<L>>) -> Json<LogsResponse> {
    Json(state.lamp.logs())
}

/// `GET /distance`
pub async fn distance<L: Lamp + 'static>(
    State(state): State<DeviceState<L>>,
) -> Json<DistanceReading> {
    Json(state.lamp.distance())
}

/// `POST /on`
pub async fn turn_on<L: Lamp + 'static>(
    State(state): State<DeviceState<L>>,
) -> Json<ControlResponse> {
    Json(state.lamp.apply(LightCommand::TurnOn))
}

/// `POST /off`
pub async fn turn_off<L: Lamp + 'static>(
    State(state): State<DeviceState<L>>,
) -> Json<ControlResponse> {
    Json(state.lamp.apply(LightCommand::TurnOff))
}

