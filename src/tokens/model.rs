//! Design Token Types
//!
//! Typed view of a structurally valid token document (camelCase on the wire).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire keys of the color slots every token document carries
pub const KNOWN_COLOR_KEYS: [&str; 7] = [
    "background",
    "surface",
    "primary",
    "onPrimary",
    "textPrimary",
    "textSecondary",
    "border",
];

/// Complete token bundle produced by a generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub meta: TokenMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    pub background: String,
    pub surface: String,
    pub primary: String,
    pub on_primary: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub border: String,
    /// Any additional named colors the generator emitted
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ColorTokens {
    /// Resolve a color by its wire key
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "background" => Some(self.background.as_str()),
            "surface" => Some(self.surface.as_str()),
            "primary" => Some(self.primary.as_str()),
            "onPrimary" => Some(self.on_primary.as_str()),
            "textPrimary" => Some(self.text_primary.as_str()),
            "textSecondary" => Some(self.text_secondary.as_str()),
            "border" => Some(self.border.as_str()),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: String,
    pub base_font_size: f64,
    pub scale_ratio: f64,
    pub sizes: TypeSizes,
}

/// Derived type ramp, in px
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSizes {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub h3: f64,
    pub h2: f64,
    pub h1: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    pub base_unit: f64,
    /// Named spacing steps; kept loose so the checker can report missing or
    /// non-numeric steps itself
    pub scale: BTreeMap<String, Value>,
}

impl SpacingTokens {
    /// Numeric value of a named step, if present and numeric
    pub fn step(&self, name: &str) -> Option<f64> {
        self.scale.get(name).and_then(Value::as_f64)
    }
}

/// Provenance of the token document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
    pub generated_by: String,
    pub method: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
