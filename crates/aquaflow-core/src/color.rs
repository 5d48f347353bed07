//! Translucent colors and compositing onto the terminal backdrop.

use ratatui::style::Color;

/// An sRGB color with a fractional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f64,
}

impl Rgba {
    /// Build a color, clamping alpha into `0.0..=1.0`. NaN alpha becomes 0.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Whether painting this color would change anything.
    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }

    /// Composite over an opaque backdrop (`[r, g, b]`) and return a terminal color.
    pub fn over(&self, backdrop: [u8; 3]) -> Color {
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = bg as f64 + (fg as f64 - bg as f64) * self.a;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::Rgb(
            mix(self.r, backdrop[0]),
            mix(self.g, backdrop[1]),
            mix(self.b, backdrop[2]),
        )
    }
}
