//! Application message types for async communication.
//!
//! Messages are sent from background worker threads to the UI thread via a
//! channel; the update loop drains them every frame. All painting state
//! stays owned by the UI thread; workers only carry frames in and out.

use std::path::PathBuf;
use std::time::Duration;

use heatbrush_core::RgbFrame;

/// Messages sent from background workers to the UI thread.
pub enum AppMessage {
    /// Base image decoded successfully.
    LoadComplete(Box<RgbFrame>, Duration),

    /// Base image load failed.
    LoadError(String),

    /// Composite written to disk.
    SaveComplete(PathBuf, Duration),

    /// Composite write failed.
    SaveError(String),
}
