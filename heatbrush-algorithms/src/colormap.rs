//! Colormap definitions and application logic.

use crate::util::f32_to_u8;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Available colormaps for the heat overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Colormap {
    /// Jet - blue to cyan to yellow to red. The classic CAM palette.
    #[default]
    Jet,
    /// Hot (Thermal) - black to red to yellow to white.
    Hot,
    /// Grayscale - black to white.
    Grayscale,
    /// Viridis (approximate) - blue to teal to green to yellow.
    Viridis,
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colormap::Jet => write!(f, "Jet"),
            Colormap::Hot => write!(f, "Hot (Thermal)"),
            Colormap::Grayscale => write!(f, "Grayscale"),
            Colormap::Viridis => write!(f, "Viridis"),
        }
    }
}

impl Colormap {
    /// All selectable palettes, in display order.
    pub const ALL: [Colormap; 4] = [
        Colormap::Jet,
        Colormap::Hot,
        Colormap::Grayscale,
        Colormap::Viridis,
    ];

    /// Apply the colormap to a normalized value [0, 1] and return RGB bytes.
    #[must_use]
    pub fn apply(self, val: f32) -> [u8; 3] {
        let val = val.clamp(0.0, 1.0);
        match self {
            Colormap::Jet => {
                // Piecewise-linear jet: each channel is a clipped tent.
                let r = (1.5 - (4.0 * val - 3.0).abs()).clamp(0.0, 1.0);
                let g = (1.5 - (4.0 * val - 2.0).abs()).clamp(0.0, 1.0);
                let b = (1.5 - (4.0 * val - 1.0).abs()).clamp(0.0, 1.0);
                [f32_to_u8(r * 255.0), f32_to_u8(g * 255.0), f32_to_u8(b * 255.0)]
            }
            Colormap::Grayscale => {
                let v = f32_to_u8(val * 255.0);
                [v, v, v]
            }
            Colormap::Hot => {
                if val < 0.5 {
                    // Red to Yellow
                    let g = f32_to_u8(val * 2.0 * 255.0);
                    [255, g, 0]
                } else {
                    // Yellow to White
                    let b = f32_to_u8((val - 0.5) * 2.0 * 255.0);
                    [255, 255, b]
                }
            }
            Colormap::Viridis => {
                // Approximate Viridis (Blue -> Teal -> Green -> Yellow)
                let r = f32_to_u8(255.0 * val.powf(2.0));
                let g = f32_to_u8(255.0 * val);
                let b = f32_to_u8(255.0 * (1.0 - val));
                [r, g, b]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_endpoints() {
        // Cold end is deep blue, midpoint green-ish, hot end deep red.
        assert_eq!(Colormap::Jet.apply(0.0), [0, 0, 128]);
        let [r, g, b] = Colormap::Jet.apply(0.5);
        assert!(g > r && g > b);
        assert_eq!(Colormap::Jet.apply(1.0), [128, 0, 0]);
    }

    #[test]
    fn test_grayscale_is_linear() {
        assert_eq!(Colormap::Grayscale.apply(0.0), [0, 0, 0]);
        assert_eq!(Colormap::Grayscale.apply(1.0), [255, 255, 255]);
        let [r, g, b] = Colormap::Grayscale.apply(0.5);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_hot_monotonic_brightness() {
        let lum = |v: f32| {
            let [r, g, b] = Colormap::Hot.apply(v);
            u32::from(r) + u32::from(g) + u32::from(b)
        };
        assert!(lum(0.25) < lum(0.5));
        assert!(lum(0.5) < lum(0.9));
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        assert_eq!(Colormap::Viridis.apply(-2.0), Colormap::Viridis.apply(0.0));
        assert_eq!(Colormap::Viridis.apply(7.0), Colormap::Viridis.apply(1.0));
    }
}
