//! Results: headline, summary, day-grouped activities, and share actions.

use leptos::prelude::*;
use trip::{ItineraryDay, group_days, parse_lines, share_text};

use crate::state::ui::UiState;
use crate::state::wizard::WizardState;

#[cfg(feature = "hydrate")]
const COPIED_FEEDBACK_MS: u32 = 2000;

#[component]
pub fn ItineraryView() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let request = move || wizard.with(|w| w.submitted.clone().unwrap_or_else(|| w.request()));
    let days = move || wizard.with(|w| group_days(&parse_lines(&w.itinerary)));

    let on_copy = move |_| {
        let req = request();
        let text = wizard.with(|w| share_text(&req, &w.itinerary));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let copied = crate::util::share::copy_to_clipboard(&text).await;
            ui.update(|u| u.copied = copied);
            if copied {
                gloo_timers::future::TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                ui.update(|u| u.copied = false);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    view! {
        <section class="itinerary">
            <h2 class="itinerary__headline">{move || request().headline()}</h2>
            <p class="itinerary__summary">{move || request().summary()}</p>
            <div class="itinerary__days">
                {move || days().into_iter().map(render_day).collect_view()}
            </div>
            <div class="itinerary__actions no-print">
                <button class="btn" on:click=on_copy>
                    {move || if ui.get().copied { "✓ Copied" } else { "📋 Copy" }}
                </button>
                <button class="btn" on:click=move |_| crate::util::share::print_page()>
                    "🖨 Print / PDF"
                </button>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        wizard.update(WizardState::start_over);
                        ui.update(|u| u.copied = false);
                    }
                >
                    "Plan Another Trip"
                </button>
            </div>
        </section>
    }
}

fn render_day(day: ItineraryDay) -> impl IntoView {
    let activities = day
        .activities
        .into_iter()
        .map(|activity| view! { <li class="itinerary__activity">"📍 " {activity}</li> })
        .collect_view();

    view! {
        <div class="itinerary__day">
            {day.title.map(|title| view! { <h3 class="itinerary__day-title">"📌 " {title}</h3> })}
            <ul class="itinerary__activities">{activities}</ul>
        </div>
    }
}
