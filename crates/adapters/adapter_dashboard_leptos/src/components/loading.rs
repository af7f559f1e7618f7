//! Placeholder for the status row before the first poll answers.

use leptos::prelude::*;

/// Status row with a spinning indicator in place of the lamp state.
#[component]
pub fn Loading(
    /// Text shown where the state label goes.
    #[prop(default = "Carregando\u{2026}")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="status status-pending">
            <div class="indicator spinner"></div>
            <span class="status-label">{message}</span>
        </div>
    }
}
