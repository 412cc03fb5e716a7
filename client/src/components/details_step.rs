//! Step 2: trip length and theme.

use leptos::prelude::*;
use trip::{MAX_DAYS, MIN_DAYS};

use crate::components::step_hint::StepHint;
use crate::state::wizard::{Step, WizardState};

#[component]
pub fn DetailsStep() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        wizard.update(|w| {
            w.next();
        });
    };

    view! {
        <form class="step" on:submit=on_next>
            <h2 class="step__title">
                {move || format!("How many days in {}?", wizard.with(|w| w.destination.trim().to_owned()))}
            </h2>
            <input
                class="step__input step__input--days"
                type="number"
                min=MIN_DAYS.to_string()
                max=MAX_DAYS.to_string()
                prop:value=move || wizard.with(|w| w.days.to_string())
                on:input=move |ev| wizard.update(|w| w.set_days_input(&event_target_value(&ev)))
            />
            <p class="step__caption">"Travel theme"</p>
            <input
                class="step__input"
                type="text"
                placeholder="e.g. Food tour, museums, hiking"
                prop:value=move || wizard.with(|w| w.theme.clone())
                on:input=move |ev| wizard.update(|w| w.theme = event_target_value(&ev))
            />
            <StepHint step=Step::Details/>
            <div class="step__actions">
                <button
                    type="button"
                    class="btn btn--ghost"
                    on:click=move |_| {
                        wizard.update(|w| {
                            w.back();
                        });
                    }
                >
                    "Back"
                </button>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || !wizard.with(|w| w.step_valid(Step::Details))
                >
                    "Next"
                </button>
            </div>
        </form>
    }
}
