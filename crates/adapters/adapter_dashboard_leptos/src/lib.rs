//! # lamphub-dashboard
//!
//! Single-page dashboard polling a lamp device over HTTP. Built for
//! `wasm32-unknown-unknown` with Trunk.
//!
//! The polling and command workflows live in `lamphub-app`; this crate only
//! provides the browser adapters (`gloo-net` client, `setTimeout` timer) and
//! the view.

use chrono::Local;
use lamphub_app::config::DashboardConfig;
use lamphub_app::dashboard::DashboardState;
use lamphub_app::services::dashboard_service::DashboardService;
use lamphub_domain::command::LightCommand;
use lamphub_domain::endpoint::BaseUrl;
use lamphub_domain::status::Status;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub mod api;
mod components;
pub mod config;
pub mod timer;

use api::HttpDeviceApi;
use components::{Controls, DistanceReader, ErrorBanner, History, Statistics, StatusCard};
use timer::BrowserTimer;

/// Workflows bound to the browser adapters.
pub type Service = DashboardService<HttpDeviceApi, BrowserTimer>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let content = match config::device_url() {
        Ok(base) => view! { <Dashboard base=base/> }.into_any(),
        Err(err) => {
            leptos::logging::error!("invalid device url: {err}");
            view! { <div class="error">{format!("URL do dispositivo inválida: {err}")}</div> }
                .into_any()
        }
    };

    view! {
        <div class="app">
            <div class="container">
                <h1>"Controle de Lâmpada"</h1>
                {content}
            </div>
        </div>
    }
}

#[component]
fn Dashboard(base: BaseUrl) -> impl IntoView {
    let service: Service = DashboardService::new(
        HttpDeviceApi::new(base),
        BrowserTimer,
        DashboardConfig::default(),
    );
    let config = *service.config();
    let state = RwSignal::new(DashboardState::new());

    let (polling, polling_handle) = futures::future::abortable({
        let service = service.clone();
        async move {
            service
                .run_polling(move |outcome| {
                    if let Err(err) = &outcome {
                        leptos::logging::warn!("poll failed: {err}");
                    }
                    state.update(|state| state.apply_poll(outcome));
                })
                .await;
        }
    });
    spawn_local(async move {
        let _ = polling.await;
    });
    on_cleanup(move || polling_handle.abort());

    let on_command = {
        let service = service.clone();
        Callback::new(move |command: LightCommand| {
            if !state.try_update(|state| state.begin_command(command)).unwrap_or(false) {
                return;
            }
            let service = service.clone();
            spawn_local(async move {
                let outcome = service.run_command(command).await;
                state.update(|state| state.finish_command(outcome));
            });
        })
    };

    let error = Signal::derive(move || state.with(DashboardState::error));
    let light = Signal::derive(move || state.with(|state| state.status().map(Status::light_state)));
    let status = Signal::derive(move || state.with(|state| state.status().cloned()));
    let controls = Signal::derive(move || state.with(DashboardState::controls));
    let rows = Signal::derive(move || {
        state.with(|state| state.history_rows(config.history_limit, &Local))
    });

    view! {
        <ErrorBanner error=error/>
        <StatusCard state=light/>
        <Controls controls=controls on_command=on_command/>
        <History rows=rows/>
        <Statistics status=status/>
        <DistanceReader service=service/>
    }
}
