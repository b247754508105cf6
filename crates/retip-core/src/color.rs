//! Color representation, CSS parsing and perceptual brightness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a hex color string (e.g., "#ff0000", "f00" or "#ff000080").
    ///
    /// Supports 3- and 4-character shorthand, 6-character RGB and
    /// 8-character RGBA.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }
        let channel =
            |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHex);

        let (rgb, alpha) = match hex.len() {
            3 | 4 => {
                let mut digits = [0u8; 4];
                for (i, d) in digits.iter_mut().enumerate().take(hex.len()) {
                    *d = channel(&hex[i..=i])? * 17;
                }
                let alpha = (hex.len() == 4).then_some(digits[3]);
                (Self::rgb8(digits[0], digits[1], digits[2]), alpha)
            }
            6 | 8 => {
                let rgb = Self::rgb8(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                );
                let alpha = if hex.len() == 8 {
                    Some(channel(&hex[6..8])?)
                } else {
                    None
                };
                (rgb, alpha)
            }
            _ => return Err(ColorParseError::InvalidLength),
        };

        Ok(alpha.map_or(rgb, |a| rgb.with_alpha(f32::from(a) / 255.0)))
    }

    /// Return a copy with a different alpha.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Reduce opacity by `amount` (a fraction of the current alpha).
    ///
    /// `fade(0.5)` on an opaque color yields alpha 0.5; `fade(1.0)` yields
    /// a fully transparent color.
    #[must_use]
    pub fn fade(self, amount: f32) -> Self {
        self.with_alpha(self.a * (1.0 - amount.clamp(0.0, 1.0)))
    }

    /// Perceived brightness in [0, 255] (ITU-R BT.709 weighted YIQ).
    #[must_use]
    pub fn brightness(&self) -> f32 {
        (self.r * 255.0).mul_add(
            0.2126,
            (self.g * 255.0).mul_add(0.7152, self.b * 255.0 * 0.0722),
        )
    }

    /// Whether the color reads as light to the eye.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.brightness() >= 128.0
    }

    /// Calculate relative luminance per WCAG 2.1.
    ///
    /// See: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    #[must_use]
    pub fn relative_luminance(&self) -> f32 {
        let r = Self::linearize(self.r);
        let g = Self::linearize(self.g);
        let b = Self::linearize(self.b);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Calculate contrast ratio between two colors per WCAG 2.1.
    ///
    /// Returns a value between 1.0 (no contrast) and 21.0 (maximum contrast).
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f32 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();

        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

        (lighter + 0.05) / (darker + 0.05)
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.channels();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// CSS functional notation: `rgb(r, g, b)` when opaque, `rgba(..)` otherwise.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        let [r, g, b] = self.channels();
        if self.a >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            // three decimals is enough for any alpha a browser distinguishes
            let a = (self.a * 1000.0).round() / 1000.0;
            format!("rgba({r}, {g}, {b}, {a})")
        }
    }

    fn channels(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }

    /// Linearize sRGB component for luminance calculation.
    fn linearize(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse any CSS color: hex (`#1d1d1d`, `#fff`, `#fffa`, `#ff000080`),
    /// named colors, and the `rgb()`, `hsl()` and `hwb()` function families
    /// in comma or space syntax.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s.starts_with('#') {
            return Self::from_hex(&s);
        }
        let parsed = csscolorparser::parse(&s).map_err(|e| ColorParseError::Invalid {
            reason: e.to_string(),
            input: s,
        })?;
        Ok(Self::new(parsed.r, parsed.g, parsed.b, parsed.a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 3, 4, 6 or 8)")]
    InvalidLength,
    /// Not a CSS color
    #[error("invalid color '{input}': {reason}")]
    Invalid {
        /// Normalized input
        input: String,
        /// What the CSS parser rejected
        reason: String,
    },
}
