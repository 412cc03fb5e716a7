//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, print,
//! randomness) from page and component logic. Each one is a no-op outside
//! the `hydrate` build so SSR and tests stay deterministic.

pub mod dark_mode;
pub mod dice;
pub mod share;
