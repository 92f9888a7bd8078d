//! Local UI chrome state (theme, margins).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of deck data so rendering
//! controls can evolve independently of what the backend stores.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether margin annotations are rendered beside deck content.
    pub margins_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            margins_visible: true,
        }
    }
}
