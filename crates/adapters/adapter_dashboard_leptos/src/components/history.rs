//! Recent activity list.

use lamphub_app::dashboard::HistoryRow;
use leptos::prelude::*;

/// History card listing the most recent log entries, newest first.
#[component]
pub fn History(#[prop(into)] rows: Signal<Vec<HistoryRow>>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Histórico"</h2>
            <div class="logs">
                <Show
                    when=move || rows.with(|rows| !rows.is_empty())
                    fallback=|| view! { <p class="empty">"Nenhum registro"</p> }
                >
                    // keyed on the whole row so a reused id still re-renders
                    <For
                        each=move || rows.get()
                        key=|row| row.clone()
                        children=move |row| view! { <HistoryItem row=row/> }
                    />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn HistoryItem(row: HistoryRow) -> impl IntoView {
    view! {
        <div class="log-item">
            <div class=format!("log-dot {}", row.state)></div>
            <div class="log-info">
                <span class="log-type">{row.state.label()}</span>
                <span class="log-time">{row.time}</span>
            </div>
            {row.duration.map(|duration| view! { <span class="log-duration">{duration}</span> })}
        </div>
    }
}
