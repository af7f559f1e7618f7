//! On-demand distance sensor reading.

use lamphub_domain::distance::DistanceReading;
use lamphub_domain::error::DeviceError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::Service;

/// Sensor card with a button that reads `/distance` once.
#[component]
pub fn DistanceReader(service: Service) -> impl IntoView {
    let (reading, set_reading) = signal::<Option<Result<DistanceReading, DeviceError>>>(None);
    let (is_reading, set_is_reading) = signal(false);

    let measure = move |_| {
        set_is_reading.set(true);
        let service = service.clone();
        spawn_local(async move {
            let result = service.read_distance().await;
            if let Err(err) = &result {
                leptos::logging::warn!("distance read failed: {err}");
            }
            set_reading.set(Some(result));
            set_is_reading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Sensor"</h2>
            <div class="sensor">
                <button class="btn-measure" on:click=measure disabled=move || is_reading.get()>
                    {move || if is_reading.get() { "\u{2026}" } else { "Medir distância" }}
                </button>
                {move || reading.get().map(|result| match result {
                    Ok(reading) => view! {
                        <span class="sensor-value">{reading.display()}</span>
                    }
                    .into_any(),
                    Err(_) => view! {
                        <span class="error-inline">"Erro ao ler sensor"</span>
                    }
                    .into_any(),
                })}
            </div>
        </div>
    }
}
