//! Colors and the bar's configurable palette.

use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from a `0xRRGGBBAA` value.
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns the same color with its alpha scaled by `factor`.
    #[must_use]
    pub fn faded(self, factor: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, self.a * factor)
    }

    /// Linearly interpolates toward another color.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to an `[r, g, b, a]` array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns true if every component is within `[0, 1]`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        let in_range = |v: f32| (0.0..=1.0).contains(&v);
        in_range(self.r) && in_range(self.g) && in_range(self.b) && in_range(self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// The bar's four configurable colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    /// Fill color of the pill path.
    pub shape_fill: Color,
    /// Background color of an active icon.
    pub icon_background: Color,
    /// Shadow color behind each icon.
    pub icon_shadow: Color,
    /// Background color of the bar body.
    pub bar_background: Color,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            shape_fill: Color::WHITE,
            icon_background: Color::WHITE,
            icon_shadow: Color::BLACK,
            bar_background: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF0000FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_color_validity() {
        assert!(Color::WHITE.is_valid());
        assert!(!Color::rgba(1.5, 0.0, 0.0, 1.0).is_valid());
        assert!(!Color::rgba(0.0, 0.0, 0.0, -0.1).is_valid());
    }
}
