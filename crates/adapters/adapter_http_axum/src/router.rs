//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use lamphub_app::ports::Lamp;

use crate::state::DeviceState;

/// Build the top-level axum [`Router`].
///
/// Device endpoints live at the root, like on the firmware. When
/// `dashboard_dir` is given, every other path is served from that directory
/// (the built dashboard). Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level and a permissive CORS layer so a
/// dashboard on another origin can call the device.
pub fn build<L>(state: DeviceState<L>, dashboard_dir: Option<&Path>) -> Router
where
    L: Lamp + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes());

    let router = match dashboard_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

async fn health_check() -> &'static str {
    "OK"
}
