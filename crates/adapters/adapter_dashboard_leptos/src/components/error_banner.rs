//! Error banner shown above the cards.

use lamphub_app::dashboard::DashboardError;
use leptos::prelude::*;

/// Renders the current dashboard error, or nothing.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<DashboardError>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! { <div class="error">{err.message()}</div> }
        })
    }
}
