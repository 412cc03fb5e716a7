//! Step 1: destination text input, popular quick picks, and "Surprise me".

use leptos::prelude::*;
use trip::{POPULAR_DESTINATIONS, PRESETS};

use crate::components::step_hint::StepHint;
use crate::state::wizard::{Step, WizardState};

#[component]
pub fn DestinationStep() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        wizard.update(|w| {
            w.next();
        });
    };

    let on_surprise = move |_| {
        let preset = trip::preset_at(crate::util::dice::roll(PRESETS.len()));
        wizard.update(|w| w.apply_preset(preset));
    };

    let chips = POPULAR_DESTINATIONS
        .into_iter()
        .map(|city| {
            view! {
                <button
                    type="button"
                    class="chip"
                    class:chip--selected=move || wizard.with(|w| w.destination.trim() == city)
                    on:click=move |_| wizard.update(|w| w.choose_destination(city))
                >
                    {city}
                </button>
            }
        })
        .collect_view();

    view! {
        <form class="step" on:submit=on_next>
            <h2 class="step__title">"Where do you want to go?"</h2>
            <input
                class="step__input"
                type="text"
                placeholder="e.g. Lisbon"
                prop:value=move || wizard.with(|w| w.destination.clone())
                on:input=move |ev| wizard.update(|w| w.destination = event_target_value(&ev))
            />
            <p class="step__caption">"Popular destinations"</p>
            <div class="chips">{chips}</div>
            <StepHint step=Step::Destination/>
            <div class="step__actions">
                <button type="button" class="btn btn--ghost" on:click=on_surprise>
                    "🎲 Surprise me"
                </button>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || !wizard.with(|w| w.step_valid(Step::Destination))
                >
                    "Next"
                </button>
            </div>
        </form>
    }
}
