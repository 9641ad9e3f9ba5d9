//! Numeric conversion helpers with explicit handling of precision loss.

/// Convert f32 to u8 with clamping to [0, 255].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f32_to_u8(value: f32) -> u8 {
    let clamped = value.clamp(0.0, 255.0);
    clamped.round() as u8
}

/// Convert usize to isize, saturating at the maximum.
pub fn usize_to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_to_u8_clamps_and_rounds() {
        assert_eq!(f32_to_u8(-1.0), 0);
        assert_eq!(f32_to_u8(0.4), 0);
        assert_eq!(f32_to_u8(0.5), 1);
        assert_eq!(f32_to_u8(254.6), 255);
        assert_eq!(f32_to_u8(300.0), 255);
    }
}
