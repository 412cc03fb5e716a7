//! Trip planner page: header, stepper, the active step, and results.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::destination_step::DestinationStep;
use crate::components::details_step::DetailsStep;
use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
use crate::components::itinerary_view::ItineraryView;
use crate::components::preferences_step::PreferencesStep;
use crate::components::stepper::Stepper;
use crate::state::ui::UiState;
use crate::state::wizard::{Step, WizardState};

#[component]
pub fn PlannerPage() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_submit = Callback::new(move |()| {
        let Some(request) = wizard.try_update(WizardState::begin_submit).flatten() else {
            return;
        };
        ui.update(|u| u.copied = false);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::plan_trip(&request).await;
            if let Err(e) = &result {
                log::warn!("{e}");
            }
            wizard.update(|w| w.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    let step = move || wizard.with(|w| w.step);

    view! {
        <div class="planner">
            <Header/>
            <main class="planner__card">
                <Show when=move || step() != Step::Results>
                    <Stepper/>
                </Show>
                <ErrorBanner/>
                {move || match step() {
                    Step::Destination => view! { <DestinationStep/> }.into_any(),
                    Step::Details => view! { <DetailsStep/> }.into_any(),
                    Step::Preferences => view! { <PreferencesStep on_submit=on_submit/> }.into_any(),
                    Step::Results => view! { <ItineraryView/> }.into_any(),
                }}
            </main>
        </div>
    }
}
