//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one piece of the wizard and read/write the shared
//! `WizardState` and `UiState` from Leptos context.

pub mod destination_step;
pub mod details_step;
pub mod error_banner;
pub mod header;
pub mod itinerary_view;
pub mod preferences_step;
pub mod step_hint;
pub mod stepper;
