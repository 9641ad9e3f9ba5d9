//! heatbrush-io: base image loading and snapshot writing.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{Error, Result};
pub use reader::load_rgb_frame;
pub use writer::{write_jpeg, SnapshotWriter};
