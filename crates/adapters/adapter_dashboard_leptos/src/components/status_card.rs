//! Lamp status indicator.

use lamphub_domain::status::LightState;
use leptos::prelude::*;

use super::Loading;

/// Shows the lamp state, or a placeholder until the first poll succeeds.
#[component]
pub fn StatusCard(
    /// `None` before any status has been received.
    #[prop(into)]
    state: Signal<Option<LightState>>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Status"</h2>
            {move || match state.get() {
                Some(state) => view! {
                    <div class="status">
                        <div class=format!("indicator {state}")></div>
                        <span>{state.label()}</span>
                    </div>
                }
                .into_any(),
                None => view! { <Loading/> }.into_any(),
            }}
        </div>
    }
}
