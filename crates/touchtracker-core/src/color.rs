//! Stroke colors.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub const fn green() -> Self {
        Self::new(0, 255, 0, 255)
    }

    /// Fully saturated, fully bright color for `hue` in `0.0..=1.0`.
    ///
    /// Values outside the range wrap around the color wheel.
    pub fn from_hue(hue: f64) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let x = 1.0 - (h % 2.0 - 1.0).abs();

        let (r, g, b) = match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };

        Self::new(channel(r), channel(g), channel(b), 255)
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_primaries() {
        assert_eq!(SerializableColor::from_hue(0.0), SerializableColor::red());
        assert_eq!(SerializableColor::from_hue(1.0 / 3.0), SerializableColor::green());
        assert_eq!(
            SerializableColor::from_hue(2.0 / 3.0),
            SerializableColor::new(0, 0, 255, 255)
        );
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(SerializableColor::from_hue(1.0), SerializableColor::from_hue(0.0));
    }

    #[test]
    fn test_hue_midpoint() {
        // Halfway between red and yellow.
        assert_eq!(
            SerializableColor::from_hue(1.0 / 12.0),
            SerializableColor::new(255, 128, 0, 255)
        );
    }

    #[test]
    fn test_peniko_round_trip() {
        let color = SerializableColor::new(12, 34, 56, 200);
        let peniko: Color = color.into();
        assert_eq!(SerializableColor::from(peniko), color);
    }
}
