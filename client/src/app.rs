//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::planner::PlannerPage;
use crate::state::{ui::UiState, wizard::WizardState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wizard and UI chrome contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wizard = RwSignal::new(WizardState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(wizard);
    provide_context(ui);

    // Effects only run in the browser, so SSR output stays in light mode.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/journeycraft.css"/>
        <Title text="JourneyCraft"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PlannerPage/>
            </Routes>
        </Router>
    }
}
