//! RGB8 pixel buffers.
//!
//! `RgbFrame` carries the decoded base image and composited output as a
//! plain row-major buffer, three bytes per pixel. Keeping it codec-free
//! lets the algorithms crate composite without pulling in an image decoder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bytes per pixel in an [`RgbFrame`].
pub const RGB_CHANNELS: usize = 3;

/// Row-major RGB8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RgbFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbFrame {
    /// Creates a black frame.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width * height * RGB_CHANNELS],
        })
    }

    /// Wraps an existing RGB8 buffer.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] on a zero dimension and
    /// [`Error::BufferSize`] if `data.len() != width * height * 3`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width * height * RGB_CHANNELS;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at `(x, y)`, or `None` out of bounds.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; RGB_CHANNELS]> {
        if x < self.width && y < self.height {
            let offset = (y * self.width + x) * RGB_CHANNELS;
            Some([self.data[offset], self.data[offset + 1], self.data[offset + 2]])
        } else {
            None
        }
    }

    /// Raw read access to the interleaved RGB buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Raw write access to the interleaved RGB buffer.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the frame, returning the raw buffer.
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let frame = RgbFrame::new(2, 2).unwrap();
        assert_eq!(frame.as_slice().len(), 12);
        assert_eq!(frame.pixel(1, 1), Some([0, 0, 0]));
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(RgbFrame::from_raw(2, 1, vec![0; 5]).is_err());
        let frame = RgbFrame::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(frame.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(frame.pixel(2, 0), None);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(RgbFrame::new(0, 1).is_err());
        assert!(RgbFrame::from_raw(1, 0, Vec::new()).is_err());
    }
}
