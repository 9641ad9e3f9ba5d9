//! Base image loading.

use std::path::Path;

use heatbrush_core::RgbFrame;

use crate::error::Result;

/// Loads an image file and converts it to an RGB8 frame.
///
/// A missing or unreadable file is the tool's one fatal startup error;
/// callers surface it and stop.
///
/// # Errors
/// Returns [`crate::Error::Image`] when the file cannot be opened or
/// decoded.
#[allow(clippy::cast_possible_truncation)]
pub fn load_rgb_frame<P: AsRef<Path>>(path: P) -> Result<RgbFrame> {
    let decoded = image::open(path)?.to_rgb8();
    let (width, height) = decoded.dimensions();
    let frame = RgbFrame::from_raw(width as usize, height as usize, decoded.into_raw())?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_load_roundtrips_dimensions_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.png");

        let mut img = RgbImage::new(5, 3);
        img.put_pixel(2, 1, image::Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let frame = load_rgb_frame(&path).unwrap();
        assert_eq!(frame.width(), 5);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.pixel(2, 1), Some([10, 20, 30]));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_rgb_frame(dir.path().join("absent.png")).is_err());
    }
}
