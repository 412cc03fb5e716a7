//! Step indicator; completed and reachable steps are clickable.

use leptos::prelude::*;

use crate::state::wizard::{Step, WizardState};

#[component]
pub fn Stepper() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();

    let items = Step::INPUTS
        .into_iter()
        .map(|step| {
            let class = move || {
                let w = wizard.get();
                let mut class = String::from("stepper__item");
                if w.step == step {
                    class.push_str(" stepper__item--active");
                } else if step.number() < w.step.number() {
                    class.push_str(" stepper__item--done");
                }
                class
            };
            view! {
                <li>
                    <button
                        class=class
                        disabled=move || !wizard.with(|w| w.can_visit(step))
                        on:click=move |_| {
                            wizard.update(|w| {
                                w.visit(step);
                            });
                        }
                    >
                        <span class="stepper__number">{step.number()}</span>
                        <span class="stepper__label">{step.label()}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! { <ol class="stepper">{items}</ol> }
}
