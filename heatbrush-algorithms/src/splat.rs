//! The per-click update rule.
//!
//! Each click rasterizes a filled disc of constant intensity into a fresh
//! zero field, blurs it with the current sigma, adds the result into the
//! accumulated field, and clamps everything back to `[0, 1]`.

use heatbrush_core::{BrushParams, Error, Result, WeightField};

use crate::blur::gaussian_blur;

/// Rasterizes a filled disc centered at `(cx, cy)`.
///
/// Covered pixels are *set* to `value`, not accumulated; parts of the disc
/// falling outside the grid are dropped. The center itself may be anywhere
/// inside the grid.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn fill_disc(field: &mut WeightField, cx: usize, cy: usize, radius: u32, value: f32) {
    let width = field.width() as isize;
    let height = field.height() as isize;
    let (cx, cy) = (cx as isize, cy as isize);
    let r = isize::try_from(radius).unwrap_or(isize::MAX);
    let r_sq = r * r;

    let y_min = (cy - r).max(0);
    let y_max = (cy + r).min(height - 1);
    let data = field.as_mut_slice();
    for y in y_min..=y_max {
        let dy = y - cy;
        let x_min = (cx - r).max(0);
        let x_max = (cx + r).min(width - 1);
        let row = y as usize * width as usize;
        for x in x_min..=x_max {
            let dx = x - cx;
            if dx * dx + dy * dy <= r_sq {
                data[row + x as usize] = value;
            }
        }
    }
}

/// Builds the blurred contribution of a single click.
///
/// # Errors
/// Returns [`Error::OutOfBounds`] for a click outside the grid and the
/// sigma validation error from the blur.
pub fn click_contribution(
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    params: &BrushParams,
) -> Result<WeightField> {
    if x >= width || y >= height {
        return Err(Error::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    params.validate()?;

    let mut disc = WeightField::new(width, height)?;
    fill_disc(&mut disc, x, y, params.radius, params.increment);
    gaussian_blur(&disc, params.sigma)
}

/// Applies one click to the accumulated field: splat, blur, add, clamp.
///
/// # Errors
/// Returns [`Error::OutOfBounds`] for a click outside the field and the
/// parameter validation errors. The field is untouched on error.
pub fn apply_click(field: &mut WeightField, x: usize, y: usize, params: &BrushParams) -> Result<()> {
    let contribution = click_contribution(field.width(), field.height(), x, y, params)?;
    field.accumulate(&contribution)?;
    field.clamp_unit();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fill_disc_sets_interior_only() {
        let mut field = WeightField::new(21, 21).unwrap();
        fill_disc(&mut field, 10, 10, 5, 0.3);

        assert_relative_eq!(field.get(10, 10).unwrap(), 0.3);
        assert_relative_eq!(field.get(15, 10).unwrap(), 0.3); // on the rim
        assert_relative_eq!(field.get(16, 10).unwrap(), 0.0);
        assert_relative_eq!(field.get(14, 14).unwrap(), 0.0); // corner outside
    }

    #[test]
    fn test_fill_disc_sets_not_adds() {
        let mut field = WeightField::new(9, 9).unwrap();
        fill_disc(&mut field, 4, 4, 3, 0.2);
        fill_disc(&mut field, 4, 4, 3, 0.2);
        assert_relative_eq!(field.get(4, 4).unwrap(), 0.2);
    }

    #[test]
    fn test_fill_disc_clipped_at_border() {
        let mut field = WeightField::new(8, 8).unwrap();
        fill_disc(&mut field, 0, 0, 4, 1.0);
        assert_relative_eq!(field.get(0, 0).unwrap(), 1.0);
        assert_relative_eq!(field.get(4, 0).unwrap(), 1.0);
        assert_relative_eq!(field.get(5, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_apply_click_stays_in_unit_range() {
        let mut field = WeightField::new(40, 40).unwrap();
        let params = BrushParams {
            sigma: 2.0,
            increment: 5.0,
            radius: 6,
        };
        for _ in 0..4 {
            apply_click(&mut field, 20, 20, &params).unwrap();
        }
        assert!(field.max_value() <= 1.0);
        assert!(field.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(field.get(20, 20).unwrap() > 0.0);
    }

    #[test]
    fn test_apply_click_out_of_bounds() {
        let mut field = WeightField::new(10, 10).unwrap();
        let params = BrushParams::default();
        let err = apply_click(&mut field, 10, 3, &params).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
        assert_relative_eq!(field.total(), 0.0);
    }

    #[test]
    fn test_negative_increment_erases() {
        let mut field = WeightField::new(30, 30).unwrap();
        let paint = BrushParams {
            sigma: 1.5,
            increment: 1.0,
            radius: 4,
        };
        apply_click(&mut field, 15, 15, &paint).unwrap();
        let before = field.get(15, 15).unwrap();

        let erase = BrushParams {
            increment: -1.0,
            ..paint
        };
        apply_click(&mut field, 15, 15, &erase).unwrap();
        let after = field.get(15, 15).unwrap();
        assert!(after < before);
        assert!(field.as_slice().iter().all(|&v| v >= 0.0));
    }
}
