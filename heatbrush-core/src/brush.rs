//! Brush parameters and their text-field parsing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default Gaussian blur sigma in pixels.
pub const DEFAULT_SIGMA: f32 = 20.0;
/// Default per-click weight increment.
pub const DEFAULT_INCREMENT: f32 = 0.1;
/// Default rasterized disc radius in pixels.
pub const DEFAULT_RADIUS: u32 = 15;

/// Parameters applied at click time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrushParams {
    /// Gaussian blur sigma applied to each click's contribution.
    pub sigma: f32,
    /// Intensity written into the disc before blurring. Negative values
    /// erase: the post-accumulate clamp floors at zero.
    pub increment: f32,
    /// Radius of the filled disc splatted at the click point.
    pub radius: u32,
}

impl Default for BrushParams {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            increment: DEFAULT_INCREMENT,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl BrushParams {
    /// Validates the parameter set.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSigma`] unless sigma is finite and positive,
    /// [`Error::InvalidIncrement`] unless the increment is finite.
    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(Error::InvalidSigma(self.sigma));
        }
        if !self.increment.is_finite() {
            return Err(Error::InvalidIncrement(self.increment));
        }
        Ok(())
    }

    /// Parses the two control-panel text fields into a new parameter set,
    /// keeping the current radius.
    ///
    /// The caller leaves its current parameters unchanged on `Err`.
    ///
    /// # Errors
    /// Returns [`Error::ParseParameter`] on unparsable text and the
    /// validation errors from [`BrushParams::validate`].
    pub fn parse_fields(&self, sigma_text: &str, increment_text: &str) -> Result<Self> {
        let sigma: f32 =
            sigma_text
                .trim()
                .parse()
                .map_err(|_| Error::ParseParameter {
                    name: "sigma",
                    value: sigma_text.to_string(),
                })?;
        let increment: f32 =
            increment_text
                .trim()
                .parse()
                .map_err(|_| Error::ParseParameter {
                    name: "increment",
                    value: increment_text.to_string(),
                })?;
        let updated = Self {
            sigma,
            increment,
            radius: self.radius,
        };
        updated.validate()?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let params = BrushParams::default();
        params.validate().unwrap();
        assert_relative_eq!(params.sigma, 20.0);
        assert_relative_eq!(params.increment, 0.1);
        assert_eq!(params.radius, 15);
    }

    #[test]
    fn test_parse_fields_ok() {
        let params = BrushParams::default();
        let updated = params.parse_fields(" 12.5 ", "0.25").unwrap();
        assert_relative_eq!(updated.sigma, 12.5);
        assert_relative_eq!(updated.increment, 0.25);
        assert_eq!(updated.radius, params.radius);
    }

    #[test]
    fn test_parse_fields_rejects_garbage() {
        let params = BrushParams::default();
        assert!(params.parse_fields("abc", "0.1").is_err());
        assert!(params.parse_fields("20", "").is_err());
    }

    #[test]
    fn test_parse_fields_rejects_invalid_numbers() {
        let params = BrushParams::default();
        // Parses, but fails validation.
        assert!(params.parse_fields("0", "0.1").is_err());
        assert!(params.parse_fields("-3", "0.1").is_err());
        assert!(params.parse_fields("inf", "0.1").is_err());
        assert!(params.parse_fields("20", "nan").is_err());
    }

    #[test]
    fn test_negative_increment_allowed() {
        let params = BrushParams::default();
        let updated = params.parse_fields("20", "-0.1").unwrap();
        assert_relative_eq!(updated.increment, -0.1);
    }
}
