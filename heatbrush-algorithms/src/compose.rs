//! Compositing the colorized weight field over the base frame.

use rayon::prelude::*;

use heatbrush_core::frame::RGB_CHANNELS;
use heatbrush_core::{Error, Result, RgbFrame, WeightField};

use crate::colormap::Colormap;
use crate::util::f32_to_u8;

/// Renders the composite: weight field quantized to 8 bits, mapped through
/// the palette, then blended with the base at equal 50/50 weight.
///
/// Per-channel blend is `(base + heat + 1) / 2`, which rounds half up the
/// way OpenCV's `addWeighted` saturates. The quantize-then-colorize order
/// is deliberate: palettes see exactly 256 levels, so equal weights render
/// to identical colors.
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] if field and frame disagree.
pub fn composite(base: &RgbFrame, field: &WeightField, colormap: Colormap) -> Result<RgbFrame> {
    if base.width() != field.width() || base.height() != field.height() {
        return Err(Error::DimensionMismatch {
            expected_width: base.width(),
            expected_height: base.height(),
            actual_width: field.width(),
            actual_height: field.height(),
        });
    }

    let width = base.width();
    let row_bytes = width * RGB_CHANNELS;
    let mut out = vec![0_u8; base.as_slice().len()];

    out.par_chunks_mut(row_bytes)
        .zip(base.as_slice().par_chunks(row_bytes))
        .zip(field.as_slice().par_chunks(width))
        .for_each(|((out_row, base_row), weight_row)| {
            for (x, &w) in weight_row.iter().enumerate() {
                let level = f32_to_u8(w * 255.0);
                let heat = colormap.apply(f32::from(level) / 255.0);
                let offset = x * RGB_CHANNELS;
                for c in 0..RGB_CHANNELS {
                    let b = u16::from(base_row[offset + c]);
                    let h = u16::from(heat[c]);
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        out_row[offset + c] = ((b + h + 1) / 2) as u8;
                    }
                }
            }
        });

    RgbFrame::from_raw(base.width(), base.height(), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_field_blends_toward_cold_color() {
        let base = RgbFrame::from_raw(2, 1, vec![200, 200, 200, 0, 0, 0]).unwrap();
        let field = WeightField::new(2, 1).unwrap();
        let out = composite(&base, &field, Colormap::Grayscale).unwrap();
        // Grayscale heat at w=0 is black: each channel halves (round up).
        assert_eq!(out.pixel(0, 0), Some([100, 100, 100]));
        assert_eq!(out.pixel(1, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_full_weight_blends_toward_hot_color() {
        let base = RgbFrame::from_raw(1, 1, vec![0, 0, 0]).unwrap();
        let field = WeightField::from_raw(1, 1, vec![1.0]).unwrap();
        let out = composite(&base, &field, Colormap::Jet).unwrap();
        // Jet at 1.0 is [128, 0, 0]; 50/50 with black rounds to 64.
        assert_eq!(out.pixel(0, 0), Some([64, 0, 0]));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let base = RgbFrame::new(4, 4).unwrap();
        let field = WeightField::new(3, 4).unwrap();
        assert!(composite(&base, &field, Colormap::Jet).is_err());
    }

    #[test]
    fn test_blend_rounds_half_up() {
        let base = RgbFrame::from_raw(1, 1, vec![1, 1, 1]).unwrap();
        let field = WeightField::new(1, 1).unwrap();
        let out = composite(&base, &field, Colormap::Grayscale).unwrap();
        // (1 + 0) / 2 = 0.5 rounds to 1.
        assert_eq!(out.pixel(0, 0), Some([1, 1, 1]));
    }
}
