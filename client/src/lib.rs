//! # client
//!
//! Leptos + WASM frontend for the JourneyCraft trip-planning wizard.
//!
//! This crate contains the page, step components, wizard state, the REST
//! call to the planning endpoint, and small browser helpers (dark mode,
//! clipboard, print, dice). The server crate renders it with SSR; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
