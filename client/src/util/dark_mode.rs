//! Light/dark theme for the wizard.
//!
//! The choice lives in `localStorage` under [`STORAGE_KEY`] as `"dark"` or
//! `"light"`; with nothing stored the system `prefers-color-scheme` wins.
//! The active theme is exposed to CSS as `<html data-theme="...">`.
//! Everything that touches the DOM is compiled only for `hydrate`, so SSR
//! always renders light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "journeycraft_theme";

/// Value stored in `localStorage` and written to `data-theme`.
#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Decide the initial theme from a stored value and the system preference.
/// Unrecognized stored values are ignored.
#[must_use]
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some("dark") => true,
        Some("light") => false,
        _ => system_prefers_dark,
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Initial theme for this browser. Always light outside the browser.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let system_prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        resolve(stored.as_deref(), system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(dark: bool) {
    let name = theme_name(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = root.set_attribute("data-theme", name);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

/// Flip the theme, apply it, and remember the choice. Returns the new mode.
pub fn toggle(dark: bool) -> bool {
    let next = !dark;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, theme_name(next));
        }
    }
    next
}
