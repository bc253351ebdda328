//! Highlight colours for found words and the fixed drawing style.

use bytemuck::{Pod, Zeroable};

/// Linear RGBA colour, components in 0.0..=1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

/// Ordered, non-empty list of highlight colours.
/// Found words take colours in discovery order, wrapping around.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Returns `None` for an empty colour list.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour for the `found_count`-th discovered word (1-based).
    pub fn color_for(&self, found_count: usize) -> Color {
        let slot = found_count.saturating_sub(1) % self.colors.len();
        self.colors[slot]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(1.0, 0.80, 0.26), // amber
                Color::rgb(0.51, 0.83, 0.98), // sky
                Color::rgb(0.65, 0.84, 0.65), // leaf
                Color::rgb(0.96, 0.56, 0.69), // rose
                Color::rgb(0.70, 0.62, 0.86), // lilac
                Color::rgb(1.0, 0.67, 0.57), // coral
                Color::rgb(0.50, 0.80, 0.77), // teal
            ],
        }
    }
}

/// Colours used for everything that is not a found-word highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Live drag highlight. Drawn semi-transparent over the grid.
    pub selection_color: Color,
    pub line_color: Color,
    pub glyph_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            selection_color: Color::rgb(0.26, 0.52, 0.96).with_alpha(0.4),
            line_color: Color::rgb(0.2, 0.2, 0.2),
            glyph_color: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_with_and_without_alpha() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));

        let c = Color::from_hex("00ff0080").unwrap();
        assert_eq!(c.g, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::from_hex("#ÿÿÿ").is_none());
    }

    #[test]
    fn palette_wraps_by_found_count() {
        let palette = Palette::new(vec![Color::WHITE, Color::BLACK]).unwrap();
        assert_eq!(palette.color_for(1), Color::WHITE);
        assert_eq!(palette.color_for(2), Color::BLACK);
        assert_eq!(palette.color_for(3), Color::WHITE);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::new(Vec::new()).is_none());
    }

    #[test]
    fn default_palette_has_one_colour_per_word() {
        assert_eq!(Palette::default().len(), 7);
    }
}
