//! Inline validation hint for one wizard step.

use leptos::prelude::*;

use crate::state::wizard::{Step, WizardState};

/// Shown only while `step` is invalid.
#[component]
pub fn StepHint(step: Step) -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let hint = move || wizard.with(|w| w.hint(step).map(|e| e.to_string()));

    view! {
        <Show when=move || hint().is_some()>
            <p class="step__hint">{move || hint().unwrap_or_default()}</p>
        </Show>
    }
}
