//! heatbrush-core: Core types for the heatbrush overlay painter.
//!
//! This crate provides the foundational data model: the floating-point
//! weight field that accumulates click intensity, the RGB base frame it is
//! composited over, the undo history, and the brush parameters.

pub mod brush;
pub mod error;
pub mod field;
pub mod frame;
pub mod history;

pub use brush::BrushParams;
pub use error::{Error, Result};
pub use field::WeightField;
pub use frame::RgbFrame;
pub use history::HistoryStack;
