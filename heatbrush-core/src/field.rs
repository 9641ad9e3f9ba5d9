//! The accumulated click-intensity grid.
//!
//! A `WeightField` is a row-major 2D grid of `f32` with the same dimensions
//! as the base image. Every completed paint operation leaves all values in
//! `[0, 1]`; intermediate states (before the final clamp) may exceed that.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Row-major grid of per-pixel weights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl WeightField {
    /// Creates an all-zero field.
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
            data: vec![0.0; width * height],
        })
    }

    /// Wraps an existing buffer.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] on a zero dimension and
    /// [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width * height;
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

    /// Grid width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of elements (`width * height`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed field; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the weight at `(x, y)`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets the weight at `(x, y)`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y * self.width + x] = value;
        Ok(())
    }

    /// Raw read access to the row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw write access to the row-major buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Checks that another grid has the same dimensions.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn check_same_dims(&self, other: &Self) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: other.width,
                actual_height: other.height,
            });
        }
        Ok(())
    }

    /// Element-wise addition of another field into this one.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if dimensions differ.
    pub fn accumulate(&mut self, other: &Self) -> Result<()> {
        self.check_same_dims(other)?;
        for (dst, src) in self.data.iter_mut().zip(&other.data) {
            *dst += *src;
        }
        Ok(())
    }

    /// Clamps every value to `[0, 1]`.
    pub fn clamp_unit(&mut self) {
        for v in &mut self.data {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// Largest value in the field.
    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0_f32, f32::max)
    }

    /// Sum of all values. Used by blur conservation checks.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.data.iter().map(|&v| f64::from(v)).sum()
    }

    /// Resets every value to zero without reallocating.
    pub fn fill_zero(&mut self) {
        self.data.fill(0.0);
    }
}
