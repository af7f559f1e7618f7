//! On/off buttons.

use lamphub_app::dashboard;
use lamphub_domain::command::LightCommand;
use leptos::prelude::*;

/// The two command buttons. At most one is enabled at a time, none while a
/// command is in flight.
#[component]
pub fn Controls(
    #[prop(into)] controls: Signal<dashboard::Controls>,
    /// Invoked with the command of the clicked button.
    #[prop(into)]
    on_command: Callback<LightCommand>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Controle"</h2>
            <div class="controls">
                <button
                    class="btn-on"
                    on:click=move |_| on_command.run(LightCommand::TurnOn)
                    disabled=move || !controls.get().turn_on
                >
                    {LightCommand::TurnOn.label()}
                </button>
                <button
                    class="btn-off"
                    on:click=move |_| on_command.run(LightCommand::TurnOff)
                    disabled=move || !controls.get().turn_off
                >
                    {LightCommand::TurnOff.label()}
                </button>
            </div>
        </div>
    }
}
