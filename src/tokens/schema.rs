//! Token Document Schema
//!
//! Fixed structural rules for generated token documents. Only shape, types
//! and basic sanity live here; design bounds are judged by the system
//! constraint checker.

use std::sync::LazyLock;

use crate::color::HEX_COLOR_PATTERN;
use crate::schema::{Field, PathStyle, Rule, SchemaValidator};

use super::model::KNOWN_COLOR_KEYS;

const TYPE_SIZE_KEYS: [&str; 8] = ["xs", "sm", "md", "lg", "xl", "h3", "h2", "h1"];
const SPACING_STEP_KEYS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

static TOKEN_VALIDATOR: LazyLock<SchemaValidator> =
    LazyLock::new(|| SchemaValidator::new(token_document_rule(), PathStyle::Pointer));

/// Root rule for a `DesignTokens` document
pub fn token_document_rule() -> Rule {
    let colors = KNOWN_COLOR_KEYS
        .iter()
        .map(|key| Field::required(key, Rule::matching(HEX_COLOR_PATTERN, None)))
        .collect();

    let sizes = TYPE_SIZE_KEYS
        .iter()
        .map(|key| Field::required(key, Rule::positive_number()))
        .collect();

    let steps = SPACING_STEP_KEYS
        .iter()
        .map(|key| Field::required(key, Rule::positive_number()))
        .collect();

    Rule::object(vec![
        Field::required("colors", Rule::object(colors)),
        Field::required(
            "typography",
            Rule::object(vec![
                Field::required("fontFamily", Rule::non_empty_string()),
                Field::required("baseFontSize", Rule::positive_number()),
                Field::required("scaleRatio", Rule::positive_number()),
                Field::required("sizes", Rule::object(sizes)),
            ]),
        ),
        Field::required(
            "spacing",
            Rule::object(vec![
                Field::required("baseUnit", Rule::positive_number()),
                Field::required("scale", Rule::object(steps)),
            ]),
        ),
        Field::required(
            "meta",
            Rule::object(vec![
                Field::required("generatedBy", Rule::non_empty_string()),
                Field::required("method", Rule::non_empty_string()),
                Field::required("timestamp", Rule::non_empty_string()),
            ]),
        ),
    ])
}

/// Process-wide token validator, built on first use
pub fn shared_token_validator() -> &'static SchemaValidator {
    &TOKEN_VALIDATOR
}

/// Validator for token documents, reporting JSON-pointer paths. Clones the
/// shared validator, so compiled patterns are reused.
pub fn token_validator() -> SchemaValidator {
    TOKEN_VALIDATOR.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StructuralValidator;
    use crate::tokens::DesignTokens;
    use serde_json::{json, Value};

    fn valid_tokens() -> Value {
        json!({
            "colors": {
                "background": "#ffffff",
                "surface": "#f7f7f7",
                "primary": "#004411",
                "onPrimary": "#ffffff",
                "textPrimary": "#111111",
                "textSecondary": "#444444",
                "border": "#cccccc"
            },
            "typography": {
                "fontFamily": "Inter",
                "baseFontSize": 16,
                "scaleRatio": 1.25,
                "sizes": {"xs": 10.24, "sm": 12.8, "md": 16, "lg": 20, "xl": 25, "h3": 31.25, "h2": 39.06, "h1": 48.83}
            },
            "spacing": {
                "baseUnit": 4,
                "scale": {"xs": 4, "sm": 8, "md": 12, "lg": 16, "xl": 20}
            },
            "meta": {"generatedBy": "generator", "method": "modular-scale", "timestamp": "2024-01-01T00:00:00Z"}
        })
    }

    #[test]
    fn test_valid_document_passes_and_deserializes() {
        let doc = valid_tokens();
        let outcome = token_validator().validate(&doc);
        assert!(outcome.ok, "{:?}", outcome.errors);
        let tokens: DesignTokens = serde_json::from_value(doc).expect("typed tokens");
        assert_eq!(tokens.colors.on_primary, "#ffffff");
    }

    #[test]
    fn test_bad_hex_and_missing_color() {
        let mut doc = valid_tokens();
        doc["colors"]["primary"] = json!("green");
        doc["colors"].as_object_mut().unwrap().remove("border");

        let outcome = token_validator().validate(&doc);
        assert!(!outcome.ok);
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.path == "/colors/primary" && e.message.starts_with("must match pattern")));
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.path == "/colors" && e.message == "must have required property 'border'"));
    }

    #[test]
    fn test_system_bounds_are_not_structural() {
        let mut doc = valid_tokens();
        doc["typography"]["baseFontSize"] = json!(40);
        doc["spacing"]["baseUnit"] = json!(2);
        assert!(token_validator().validate(&doc).ok);
    }

    #[test]
    fn test_extra_meta_fields_allowed() {
        let mut doc = valid_tokens();
        doc["meta"]["seed"] = json!(42);
        assert!(token_validator().validate(&doc).ok);
    }

    #[test]
    fn test_validator_is_built_once() {
        assert!(std::ptr::eq(shared_token_validator(), shared_token_validator()));
        let doc = valid_tokens();
        assert_eq!(
            token_validator().validate(&doc),
            shared_token_validator().validate(&doc)
        );
    }

    #[test]
    fn test_empty_document_reports_root_required() {
        let outcome = token_validator().validate(&json!({}));
        assert_eq!(outcome.errors.len(), 4);
        assert!(outcome.errors.iter().all(|e| e.path == "#/required"));
    }
}
