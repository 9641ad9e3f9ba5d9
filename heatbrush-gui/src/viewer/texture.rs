//! Texture generation for the composite display.

use egui::ColorImage;

use heatbrush_core::RgbFrame;

/// Converts a composite frame into an egui color image.
#[must_use]
pub fn frame_to_color_image(frame: &RgbFrame) -> ColorImage {
    ColorImage::from_rgb([frame.width(), frame.height()], frame.as_slice())
}
