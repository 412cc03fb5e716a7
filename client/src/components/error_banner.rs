//! Dismissible error message for failed submissions.

use leptos::prelude::*;

use crate::state::wizard::WizardState;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let message = move || wizard.with(|w| w.error.clone());

    view! {
        <Show when=move || message().is_some()>
            <div class="error-banner" role="alert">
                <span>{move || message().unwrap_or_default()}</span>
                <button class="error-banner__close" on:click=move |_| wizard.update(|w| w.error = None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
