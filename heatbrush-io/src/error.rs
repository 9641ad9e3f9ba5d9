//! Error types for heatbrush-io.

use thiserror::Error;

/// Result type alias for IO operations.
pub type Result<T> = std::result::Result<T, Error>;

/// IO error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode or encode error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Core buffer/dimension error.
    #[error("core error: {0}")]
    Core(#[from] heatbrush_core::Error),
}
