//! # lamphubd: simulated lamp device
//!
//! Composition root that runs a virtual lamp behind the device HTTP
//! contract, so the dashboard can be developed and tested without the
//! microcontroller.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing`
//! - Construct the virtual lamp and, when enabled, its sensor sweep task
//! - Build the axum router (device endpoints + optional dashboard assets)
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use lamphub_adapter_http_axum::router;
use lamphub_adapter_http_axum::state::DeviceState;
use lamphub_adapter_virtual::{VirtualLamp, spawn_sweep};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Device
    let lamp = Arc::new(VirtualLamp::new(config.lamp_config()));
    let sweep = config.sweep().map(|(sweep, period)| {
        tracing::info!(period_ms = period.as_millis(), "sensor sweep enabled");
        spawn_sweep(Arc::clone(&lamp), sweep, period)
    });

    // HTTP
    let app = router::build(DeviceState::from_arc(lamp), config.dashboard_dir());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "lamphubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = sweep {
        handle.abort();
    }
    tracing::info!("lamphubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
