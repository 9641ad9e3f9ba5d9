//! UI rendering modules.

pub mod control_panel;
pub mod main_view;
pub mod theme;
