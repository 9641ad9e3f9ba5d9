//! Background task state for load and save operations.

/// Tracks in-flight background work and the user-facing status line.
pub struct TaskState {
    /// Whether a base image is currently being decoded.
    pub is_loading: bool,
    /// Whether a snapshot is currently being written.
    pub is_saving: bool,
    /// User-facing status message.
    pub status_text: String,
}

impl Default for TaskState {
    fn default() -> Self {
        Self {
            is_loading: false,
            is_saving: false,
            status_text: "Open an image to start painting".to_string(),
        }
    }
}

impl TaskState {
    /// True while any background work is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_saving
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }
}
