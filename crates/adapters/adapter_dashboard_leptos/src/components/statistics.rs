//! Device counters from the last status.

use lamphub_domain::status::Status;
use lamphub_domain::time::format_seconds;
use leptos::prelude::*;

use super::StatCard;

/// Grid of counters reported by the device.
///
/// Hidden until a status has been received.
#[component]
pub fn Statistics(#[prop(into)] status: Signal<Option<Status>>) -> impl IntoView {
    let field = move |render: fn(&Status) -> String| {
        Signal::derive(move || status.with(|s| s.as_ref().map(render).unwrap_or_default()))
    };

    view! {
        <Show when=move || status.with(Option::is_some)>
            <div class="card">
                <h2>"Estatísticas"</h2>
                <div class="stats">
                    <StatCard label="Ativações" value=field(|s| s.total_activations.to_string())/>
                    <StatCard label="Tempo ligada" value=field(|s| format_seconds(s.total_time_on))/>
                    <StatCard
                        label="Tempo médio"
                        value=field(|s| format_seconds(whole_seconds(s.average_time_on)))
                    />
                    <StatCard
                        label="Sessão atual"
                        value=field(|s| format_seconds(s.current_session_duration))
                    />
                    <StatCard label="Tempo online" value=field(|s| format_seconds(s.uptime))/>
                    <StatCard
                        label="Distância"
                        value=field(|s| format!("{:.1} cm", s.current_distance))
                    />
                    <StatCard
                        label="Modo"
                        value=field(|s| mode_label(s.manual_mode).to_string())
                    />
                </div>
            </div>
        </Show>
    }
}

fn mode_label(manual_mode: bool) -> &'static str {
    if manual_mode {
        "Manual"
    } else {
        "Automático"
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(seconds: f64) -> u64 {
    seconds.max(0.0).round() as u64
}
