//! Reactive application state.
//!
//! ARCHITECTURE
//! ============
//! Each state struct is held in a `RwSignal` and provided through Leptos
//! context by `app::App`. Transition rules are plain methods so they can be
//! tested without a browser.

pub mod ui;
pub mod wizard;
