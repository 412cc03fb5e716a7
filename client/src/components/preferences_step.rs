//! Step 3: pace, then submit.

use leptos::prelude::*;
use trip::Pace;

use crate::state::wizard::WizardState;

#[component]
pub fn PreferencesStep(on_submit: Callback<()>) -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let loading = move || wizard.with(|w| w.loading);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let pace_cards = Pace::ALL
        .into_iter()
        .map(|pace| {
            view! {
                <button
                    type="button"
                    class="pace-card"
                    class:pace-card--selected=move || wizard.with(|w| w.pace == pace)
                    on:click=move |_| wizard.update(|w| w.pace = pace)
                >
                    <span class="pace-card__icon">{pace.icon()}</span>
                    <span class="pace-card__label">{pace.label()}</span>
                    <span class="pace-card__blurb">{pace.blurb()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <form class="step" on:submit=on_form_submit>
            <h2 class="step__title">"How fast do you like to travel?"</h2>
            <div class="pace-cards">{pace_cards}</div>
            <div class="step__actions">
                <button
                    type="button"
                    class="btn btn--ghost"
                    disabled=loading
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
                    disabled=move || loading() || !wizard.with(WizardState::is_complete)
                >
                    {move || if loading() { "Planning your trip..." } else { "Generate Itinerary" }}
                </button>
            </div>
        </form>
    }
}
