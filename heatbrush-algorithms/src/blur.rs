//! Separable Gaussian blur over a weight field.
//!
//! The aperture is derived from sigma the way OpenCV does for f32 data
//! when no explicit kernel size is given: taps extend to `ceil(4 * sigma)`
//! on each side. Borders mirror without repeating the edge sample
//! (reflect-101), and the kernel is normalized to unit sum, so blurring
//! conserves the total weight of any mass lying deeper than one kernel
//! radius from the border.

use rayon::prelude::*;

use heatbrush_core::{Error, Result, WeightField};

use crate::util::usize_to_isize;

/// Builds a normalized 1D Gaussian kernel for the given sigma.
///
/// The returned vector has `2 * ceil(4 * sigma) + 1` taps and sums to 1.
///
/// # Errors
/// Returns [`Error::InvalidSigma`] unless sigma is finite and positive.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gaussian_kernel(sigma: f32) -> Result<Vec<f32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidSigma(sigma));
    }
    let radius = (4.0 * sigma).ceil().max(1.0) as usize;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);

    let mut kernel = Vec::with_capacity(2 * radius + 1);
    let mut sum = 0.0_f64;
    for i in 0..=2 * radius {
        let d = i as f64 - radius as f64;
        let w = (-d * d / denom).exp();
        sum += w;
        kernel.push(w);
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(kernel.into_iter().map(|w| (w / sum) as f32).collect())
}

/// Mirrors an index into `[0, len)` without repeating the edge sample.
///
/// For `len == 1` every index maps to 0. The loop terminates because each
/// reflection strictly reduces the distance to the valid range.
#[allow(clippy::cast_sign_loss)]
fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = usize_to_isize(len - 1);
    let mut i = index;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Horizontal convolution pass.
fn convolve_rows(src: &[f32], dst: &mut [f32], width: usize, kernel: &[f32], radius: usize) {
    let r = usize_to_isize(radius);
    dst.par_chunks_mut(width)
        .zip(src.par_chunks(width))
        .for_each(|(drow, srow)| {
            for (x, out) in drow.iter_mut().enumerate() {
                let mut acc = 0.0_f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = reflect_101(usize_to_isize(x) + usize_to_isize(k) - r, width);
                    acc += w * srow[sx];
                }
                *out = acc;
            }
        });
}

/// Vertical convolution pass. Accumulates row-by-row to stay cache friendly.
fn convolve_columns(
    src: &[f32],
    dst: &mut [f32],
    width: usize,
    height: usize,
    kernel: &[f32],
    radius: usize,
) {
    let r = usize_to_isize(radius);
    dst.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, drow)| {
            drow.fill(0.0);
            for (k, &w) in kernel.iter().enumerate() {
                let sy = reflect_101(usize_to_isize(y) + usize_to_isize(k) - r, height);
                let srow = &src[sy * width..(sy + 1) * width];
                for (out, &s) in drow.iter_mut().zip(srow) {
                    *out += w * s;
                }
            }
        });
}

/// Gaussian-blurs a field, returning a new field of the same dimensions.
///
/// # Errors
/// Returns [`Error::InvalidSigma`] for a non-finite or non-positive sigma.
pub fn gaussian_blur(field: &WeightField, sigma: f32) -> Result<WeightField> {
    let kernel = gaussian_kernel(sigma)?;
    let radius = kernel.len() / 2;
    let (width, height) = (field.width(), field.height());

    let mut horizontal = vec![0.0_f32; width * height];
    convolve_rows(field.as_slice(), &mut horizontal, width, &kernel, radius);

    let mut blurred = vec![0.0_f32; width * height];
    convolve_columns(&horizontal, &mut blurred, width, height, &kernel, radius);

    WeightField::from_raw(width, height, blurred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kernel_normalized_and_symmetric() {
        let kernel = gaussian_kernel(2.5).unwrap();
        assert_eq!(kernel.len(), 2 * 10 + 1);
        let sum: f32 = kernel.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
        for i in 0..kernel.len() / 2 {
            assert_relative_eq!(kernel[i], kernel[kernel.len() - 1 - i]);
        }
    }

    #[test]
    fn test_kernel_rejects_bad_sigma() {
        assert!(gaussian_kernel(0.0).is_err());
        assert!(gaussian_kernel(-1.0).is_err());
        assert!(gaussian_kernel(f32::NAN).is_err());
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(0, 5), 0);
        assert_eq!(reflect_101(4, 5), 4);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        // Degenerate single-row grid.
        assert_eq!(reflect_101(-3, 1), 0);
        assert_eq!(reflect_101(7, 1), 0);
    }

    #[test]
    fn test_blur_conserves_interior_weight() {
        // sigma 2.0 gives radius 8; the impulse sits deeper than that
        // from every border, so no mass is folded back by reflection.
        let mut field = WeightField::new(32, 24).unwrap();
        field.set(16, 12, 1.0).unwrap();
        let before = field.total();

        let blurred = gaussian_blur(&field, 2.0).unwrap();
        assert_relative_eq!(blurred.total(), before, epsilon = 1e-4);
        assert!(blurred.as_slice().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let mut field = WeightField::new(16, 16).unwrap();
        field.set(8, 8, 1.0).unwrap();
        let blurred = gaussian_blur(&field, 1.5).unwrap();

        let center = blurred.get(8, 8).unwrap();
        let neighbor = blurred.get(9, 8).unwrap();
        let far = blurred.get(0, 0).unwrap();
        assert!(center > neighbor);
        assert!(neighbor > far);
        assert!(center < 1.0);
    }

    #[test]
    fn test_blur_single_pixel_column_does_not_panic() {
        // Kernel radius (12) exceeds both dimensions; reflection folds
        // mass back, so only finiteness and sign are checked here.
        let mut field = WeightField::new(1, 8).unwrap();
        field.set(0, 4, 1.0).unwrap();
        let blurred = gaussian_blur(&field, 3.0).unwrap();
        assert!(blurred.as_slice().iter().all(|&v| v.is_finite() && v >= 0.0));
        assert!(blurred.total() > 0.0);
    }
}
