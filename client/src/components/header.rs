//! App header with title and dark-mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <span class="header__logo" aria-hidden="true">"✈️"</span>
            <div class="header__titles">
                <h1 class="header__title">"JourneyCraft"</h1>
                <p class="header__subtitle">"Plan your perfect trip in three steps"</p>
            </div>
            <button
                class="btn header__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
