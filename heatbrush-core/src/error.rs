//! Error types for heatbrush-core.

use thiserror::Error;

/// Result type alias for heatbrush operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for heatbrush operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Two grids with different dimensions were combined.
    #[error("dimension mismatch: {expected_width}x{expected_height} vs {actual_width}x{actual_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// A raw buffer did not match the expected element count.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// A grid was created with a zero-sized dimension.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel coordinate outside the grid.
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height}")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Blur sigma must be finite and positive.
    #[error("invalid sigma: {0}")]
    InvalidSigma(f32),

    /// Per-click increment must be finite.
    #[error("invalid increment: {0}")]
    InvalidIncrement(f32),

    /// A parameter text field could not be parsed as a number.
    #[error("cannot parse {name} from {value:?}")]
    ParseParameter { name: &'static str, value: String },
}
