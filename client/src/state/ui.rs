//! Local UI chrome state (theme, transient copy feedback).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the wizard state so trip data and
//! display toggles evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for dark mode and the clipboard confirmation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Set after a successful copy; cleared when a new plan is shown.
    pub copied: bool,
}
