//! User Constraints
//!
//! The user's declared design preferences, their structural rules, and
//! parsing from a raw JSON document.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::color::HEX_COLOR_PATTERN;
use crate::schema::{Field, FieldIssue, PathStyle, Rule, SchemaValidator, StructuralValidator};

static USER_VALIDATOR: LazyLock<SchemaValidator> = LazyLock::new(user_constraints_validator);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// WCAG conformance level the user is aiming for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessibilityTarget {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl AccessibilityTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessibilityTarget::Aa => "AA",
            AccessibilityTarget::Aaa => "AAA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralPreference {
    Cool,
    Warm,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePreset {
    Compact,
    Balanced,
    Expressive,
    Loose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Condensed,
    Normal,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    Serif,
    SansSerif,
    Monospace,
}

/// Validated user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConstraints {
    pub theme_mode: ThemeMode,
    pub accessibility_target: AccessibilityTarget,
    pub brand: Brand,
    pub typography: TypographyPreference,
    pub spacing: SpacingPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral_preference: Option<NeutralPreference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyPreference {
    pub base_font_size: f64,
    pub scale_preset: ScalePreset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamilyPreference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilyPreference {
    pub style: FontStyle,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingPreference {
    pub density: Density,
}

/// The constraints document was rejected before validation could start
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid user constraints ({} issue(s))", .issues.len())]
pub struct InvalidConstraints {
    pub issues: Vec<FieldIssue>,
}

/// Structural rules for a user-constraints document
pub fn user_constraints_rule() -> Rule {
    let primary_hex = Rule::matching(
        HEX_COLOR_PATTERN,
        Some("Primary color must be a valid hex code like #004411 or #abc"),
    );
    let secondary_hex = Rule::matching(
        HEX_COLOR_PATTERN,
        Some("Secondary color must be a valid hex code like #004411 or #abc"),
    );

    Rule::object(vec![
        Field::required("themeMode", Rule::one_of(&["light", "dark"])),
        Field::required("accessibilityTarget", Rule::one_of(&["AA", "AAA"])),
        Field::required(
            "brand",
            Rule::object(vec![
                Field::required("primary", primary_hex),
                Field::optional("secondary", secondary_hex),
                Field::optional(
                    "neutralPreference",
                    Rule::one_of(&["cool", "warm", "neutral"]),
                ),
            ]),
        ),
        Field::required(
            "typography",
            Rule::object(vec![
                Field::required("baseFontSize", Rule::number_in(10.0, 24.0)),
                Field::required(
                    "scalePreset",
                    Rule::one_of(&["compact", "balanced", "expressive", "loose"]),
                ),
                Field::optional(
                    "fontFamily",
                    Rule::object(vec![
                        Field::required(
                            "style",
                            Rule::one_of(&["serif", "sans-serif", "monospace"]),
                        ),
                        Field::required("name", Rule::string_len(2, 80)),
                    ]),
                ),
            ]),
        ),
        Field::required(
            "spacing",
            Rule::object(vec![Field::required(
                "density",
                Rule::one_of(&["condensed", "normal", "spacious"]),
            )]),
        ),
        Field::optional("styleTags", Rule::array(Rule::string_len(2, 24), Some(5))),
    ])
}

/// Validator for user-constraint documents, reporting dotted paths
pub fn user_constraints_validator() -> SchemaValidator {
    SchemaValidator::new(user_constraints_rule(), PathStyle::Dotted)
}

/// Validate and type a raw user-constraints document
pub fn parse_user_constraints(document: &Value) -> Result<UserConstraints, InvalidConstraints> {
    parse_user_constraints_with(&*USER_VALIDATOR, document)
}

/// Same as [`parse_user_constraints`] with a caller-supplied validator
pub fn parse_user_constraints_with(
    validator: &dyn StructuralValidator,
    document: &Value,
) -> Result<UserConstraints, InvalidConstraints> {
    let outcome = validator.validate(document);
    if !outcome.ok {
        return Err(InvalidConstraints {
            issues: outcome.errors,
        });
    }

    serde_json::from_value(document.clone()).map_err(|e| InvalidConstraints {
        issues: vec![FieldIssue {
            path: "#".to_string(),
            message: e.to_string(),
        }],
    })
}
