//! Color Science
//!
//! Hex parsing, WCAG relative luminance and contrast ratio.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Hex color as it must appear inside token and constraint documents.
pub const HEX_COLOR_PATTERN: &str = r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

// The leading '#' is optional for the color functions themselves.
static LOOSE_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("static hex pattern compiles")
});

/// Errors raised by the color functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidColorFormat(String),
}

/// An 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (any case)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let caps = LOOSE_HEX
            .captures(hex)
            .ok_or_else(|| ColorError::InvalidColorFormat(hex.to_string()))?;
        let digits = &caps[1];

        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let n = u32::from_str_radix(&full, 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))?;

        Ok(Self {
            r: ((n >> 16) & 0xff) as u8,
            g: ((n >> 8) & 0xff) as u8,
            b: (n & 0xff) as u8,
        })
    }

    /// WCAG relative luminance in [0, 1]
    pub fn relative_luminance(self) -> f64 {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

/// sRGB transfer function decode for one 8-bit channel
fn srgb_to_linear(channel: u8) -> f64 {
    let s = f64::from(channel) / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a hex color
pub fn relative_luminance(hex: &str) -> Result<f64, ColorError> {
    Ok(Rgb::from_hex(hex)?.relative_luminance())
}

/// Contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Symmetric in its arguments and always >= 1.0.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Result<f64, ColorError> {
    let la = relative_luminance(hex_a)?;
    let lb = relative_luminance(hex_b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Ok((lighter + 0.05) / (darker + 0.05))
}
