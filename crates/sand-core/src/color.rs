//! RGBA colors and perceptual blending.

use std::fmt;
use std::str::FromStr;

use crate::error::{SandError, SandResult};

/// Brightness exponent used when blending two colors.
const BLEND_GAMMA: f64 = 0.43;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Off-white used for blocks in dark mode.
    pub const WHITE_SMOKE: Color = Color::rgb(0xF5, 0xF5, 0xF5);
    /// Water blue.
    pub const DEEP_SKY_BLUE: Color = Color::rgb(0x00, 0xBF, 0xFF);
    /// Default light background.
    pub const LIGHT_BLUE: Color = Color::rgb(0xAD, 0xD8, 0xE6);

    /// An opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> SandResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(SandError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| SandError::InvalidColor(hex.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Uppercase `#RRGGBB`; alpha is not included.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to `[0, 1]`.
    pub fn normalised(&self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|v| f64::from(v) / 255.0)
    }

    /// Channels converted from sRGB to linear light.
    pub fn linear(&self) -> [f64; 3] {
        self.normalised().map(|v| {
            if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        })
    }

    /// Build a color from `[0, 1]` channels. Values are rounded and clamped.
    pub fn from_normalised([r, g, b]: [f64; 3]) -> Self {
        let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Build a color from linear-light channels.
    pub fn from_linear(channels: [f64; 3]) -> Self {
        Self::from_normalised(channels.map(|v| {
            if v <= 0.003_130_8 {
                v * 12.92
            } else {
                1.055 * v.powf(1.0 / 2.4) - 0.055
            }
        }))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = SandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Blend two colors at `mix` (0 = `from`, 1 = `to`).
///
/// Interpolates in linear light, then rescales so perceived brightness
/// moves evenly between the endpoints.
pub fn blend(from: Color, to: Color, mix: f64) -> Color {
    let a = from.linear();
    let b = to.linear();
    let lerp = |x: f64, y: f64| x + (y - x) * mix;

    let mut out = [lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2])];

    let brightness_a = (a[0] + a[1] + a[2]).powf(BLEND_GAMMA);
    let brightness_b = (b[0] + b[1] + b[2]).powf(BLEND_GAMMA);
    let intensity = lerp(brightness_a, brightness_b).powf(1.0 / BLEND_GAMMA);

    let sum = out[0] + out[1] + out[2];
    if sum > 0.0 {
        let factor = intensity / sum;
        out = out.map(|v| v * factor);
    }

    Color::from_linear(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_uppercase() {
        let c = Color::from_hex("#d17759").unwrap();
        assert_eq!(c, Color::rgb(0xD1, 0x77, 0x59));
        assert_eq!(c.hex(), "#D17759");
        assert_eq!(c.to_string(), "#D17759");
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!("00BFFF".parse::<Color>().unwrap(), Color::DEEP_SKY_BLUE);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn linear_conversion_preserves_extremes() {
        assert_eq!(Color::from_linear(Color::BLACK.linear()), Color::BLACK);
        let white = Color::rgb(255, 255, 255);
        assert_eq!(Color::from_linear(white.linear()), white);
    }

    #[test]
    fn blend_endpoints_near_inputs() {
        let a = Color::rgb(86, 24, 70);
        let b = Color::rgb(255, 99, 56);
        for (mix, expected) in [(0.0, a), (1.0, b)] {
            let got = blend(a, b, mix);
            assert!(got.r.abs_diff(expected.r) <= 1, "{got} vs {expected}");
            assert!(got.g.abs_diff(expected.g) <= 1, "{got} vs {expected}");
            assert!(got.b.abs_diff(expected.b) <= 1, "{got} vs {expected}");
        }
    }

    #[test]
    fn blend_black_to_black_is_black() {
        assert_eq!(blend(Color::BLACK, Color::BLACK, 0.5), Color::BLACK);
    }

    #[test]
    fn blend_midpoint_between_grays() {
        let dark = Color::rgb(40, 40, 40);
        let light = Color::rgb(200, 200, 200);
        let mid = blend(dark, light, 0.5);
        assert!(mid.r > dark.r && mid.r < light.r);
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
    }
}
