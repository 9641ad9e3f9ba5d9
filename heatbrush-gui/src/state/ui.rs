//! UI state for panel visibility.

/// Panel visibility and toggle state.
pub struct UiState {
    /// Whether the usage notes section is expanded.
    pub show_help: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { show_help: true }
    }
}
