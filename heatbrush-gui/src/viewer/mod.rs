//! Visualization modules for the composite display.

mod texture;

pub use texture::frame_to_color_image;
