//! Application state modules.

mod task;
mod ui;

pub use task::TaskState;
pub use ui::UiState;
