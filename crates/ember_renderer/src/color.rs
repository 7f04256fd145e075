//! Accumulated radiance and conversion to 8-bit RGBA.

use std::ops::{AddAssign, Div};

use ember_math::{Interval, Vec3};

/// Linear RGB color (values typically 0-1).
pub type Color = Vec3;

/// Running sum of color contributions for one pixel.
///
/// The divisor (sample count) lives next to it in the accumulation buffer;
/// a `PixelColor` never holds a clamped display color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PixelColor(pub Color);

impl PixelColor {
    pub const ZERO: PixelColor = PixelColor(Color::ZERO);

    /// Mean color over `samples` contributions, or `None` when nothing was
    /// accumulated.
    pub fn mean(&self, samples: u32) -> Option<Color> {
        if samples == 0 {
            return None;
        }
        Some((*self / samples).0)
    }
}

impl AddAssign<Color> for PixelColor {
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs;
    }
}

impl Div<u32> for PixelColor {
    type Output = PixelColor;

    /// Divide by a sample count. [`PixelColor::mean`] guards against zero.
    fn div(self, samples: u32) -> PixelColor {
        PixelColor(self.0 / samples as f32)
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a mean color to 8-bit RGBA with alpha fully opaque.
pub fn color_to_rgba(color: Color, gamma_correct: bool) -> [u8; 4] {
    let channel = |c: f32| {
        let c = if gamma_correct { linear_to_gamma(c) } else { c };
        (255.0 * Interval::UNIT.clamp(c)).round() as u8
    };
    [channel(color.x), channel(color.y), channel(color.z), 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_divides_by_sample_count() {
        let mut sum = PixelColor::ZERO;
        sum += Color::new(1.0, 0.0, 0.5);
        sum += Color::new(0.0, 1.0, 0.5);

        assert_eq!(sum.mean(2), Some(Color::new(0.5, 0.5, 0.5)));
        assert_eq!(sum.mean(0), None);
    }

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(-1.0, 0.5, 4.0), false), [0, 128, 255, 255]);
        assert_eq!(color_to_rgba(Color::ZERO, false), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::ONE, false), [255, 255, 255, 255]);
    }

    #[test]
    fn test_color_to_rgba_gamma() {
        // sqrt(0.25) = 0.5
        assert_eq!(color_to_rgba(Color::splat(0.25), true), [128, 128, 128, 255]);
        assert_eq!(color_to_rgba(Color::splat(0.25), false), [64, 64, 64, 255]);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-3.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
    }
}
