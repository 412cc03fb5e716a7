//! Clipboard copy and print for the results view.
//!
//! The print dialog doubles as "save as PDF". Copy resolves the browser's
//! clipboard promise, so a denied permission reads as a failed copy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Write `text` to the system clipboard. Resolves to `false` when no
/// clipboard is reachable or the browser rejects the write.
pub async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
            return false;
        };
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("clipboard write failed: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Open the browser print dialog.
pub fn print_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::warn!("print failed: {e:?}");
            }
        }
    }
}
