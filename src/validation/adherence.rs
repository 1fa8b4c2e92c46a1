//! User Adherence Checker
//!
//! Soft comparisons between the generated tokens and the user's stated
//! preferences. Runs on the raw document, so every lookup tolerates absent
//! or malformed tokens. Items here never count as system failures.

use serde_json::{json, Value};

use crate::constraints::{DerivedValues, UserConstraints};

use super::item::ValidationItem;

const NUMERIC_TOLERANCE: f64 = 1e-3;

pub fn check_user_adherence(
    tokens: &Value,
    user: &UserConstraints,
    derived: &DerivedValues,
) -> Vec<ValidationItem> {
    vec![
        brand_primary_match(tokens, user),
        theme_mode(user),
        base_font_size_match(tokens, user),
        scale_ratio_match(tokens, user, derived),
        base_unit_match(tokens, user, derived),
    ]
}

fn brand_primary_match(tokens: &Value, user: &UserConstraints) -> ValidationItem {
    let brand_primary = user.brand.primary.to_lowercase();
    let token_primary = tokens
        .pointer("/colors/primary")
        .and_then(Value::as_str)
        .map(str::to_lowercase);

    let ok = token_primary.as_deref() == Some(brand_primary.as_str());
    let message = if ok {
        "Primary token color matches user brand primary color exactly."
    } else {
        "Primary token does not exactly match the user brand primary color. \
         This will be treated as a soft preference."
    };

    ValidationItem::new("user:brandPrimaryMatch", ok, message).with_details(json!({
        "brandPrimary": brand_primary,
        "tokenPrimary": token_primary,
    }))
}

fn theme_mode(user: &UserConstraints) -> ValidationItem {
    let mode = user.theme_mode.as_str();
    ValidationItem::new(
        "user:themeMode",
        true,
        format!(
            "User theme mode preference is {}. This is noted for downstream use \
             but does not affect token validation at this stage.",
            mode
        ),
    )
    .with_details(json!({ "themeMode": mode }))
}

fn base_font_size_match(tokens: &Value, user: &UserConstraints) -> ValidationItem {
    numeric_match(
        "user:baseFontSizeMatch",
        "Base font size",
        tokens.pointer("/typography/baseFontSize").and_then(Value::as_f64),
        user.typography.base_font_size,
    )
}

fn scale_ratio_match(
    tokens: &Value,
    user: &UserConstraints,
    derived: &DerivedValues,
) -> ValidationItem {
    let mut item = numeric_match(
        "user:scaleRatioMatch",
        "Scale ratio",
        tokens.pointer("/typography/scaleRatio").and_then(Value::as_f64),
        derived.scale_ratio,
    );
    if let Some(details) = item.details.as_mut() {
        details.insert("scalePreset".to_string(), json!(user.typography.scale_preset));
    }
    item
}

fn base_unit_match(
    tokens: &Value,
    user: &UserConstraints,
    derived: &DerivedValues,
) -> ValidationItem {
    let mut item = numeric_match(
        "user:baseUnitMatch",
        "Base spacing unit",
        tokens.pointer("/spacing/baseUnit").and_then(Value::as_f64),
        derived.base_unit,
    );
    if let Some(details) = item.details.as_mut() {
        details.insert("density".to_string(), json!(user.spacing.density));
    }
    item
}

fn numeric_match(id: &str, label: &str, token: Option<f64>, expected: f64) -> ValidationItem {
    let ok = token.is_some_and(|value| (value - expected).abs() < NUMERIC_TOLERANCE);
    let message = match token {
        Some(value) if ok => format!("{} {} matches the user preference.", label, value),
        Some(value) => format!(
            "{} {} differs from the user preference {}. Treated as a soft preference.",
            label, value, expected
        ),
        None => format!(
            "{} is not available in the tokens; user preference is {}.",
            label, expected
        ),
    };

    ValidationItem::new(id, ok, message).with_details(json!({
        "token": token,
        "expected": expected,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{derive, parse_user_constraints};

    fn user(primary: &str) -> UserConstraints {
        parse_user_constraints(&json!({
            "themeMode": "dark",
            "accessibilityTarget": "AA",
            "brand": {"primary": primary},
            "typography": {"baseFontSize": 16, "scalePreset": "balanced"},
            "spacing": {"density": "condensed"}
        }))
        .expect("valid constraints")
    }

    fn run(tokens: &Value, primary: &str) -> Vec<ValidationItem> {
        let user = user(primary);
        check_user_adherence(tokens, &user, &derive(&user))
    }

    fn find<'a>(items: &'a [ValidationItem], id: &str) -> &'a ValidationItem {
        items.iter().find(|i| i.id == id).expect("item present")
    }

    #[test]
    fn test_brand_primary_match_ignores_case() {
        let tokens = json!({"colors": {"primary": "#00aaFF"}});
        let items = run(&tokens, "#00AAff");
        assert!(find(&items, "user:brandPrimaryMatch").ok);
    }

    #[test]
    fn test_brand_primary_mismatch_is_soft() {
        let tokens = json!({"colors": {"primary": "#004412"}});
        let items = run(&tokens, "#004411");
        let item = find(&items, "user:brandPrimaryMatch");
        assert!(!item.ok);
        assert_eq!(item.detail("tokenPrimary"), Some(&json!("#004412")));
    }

    #[test]
    fn test_absent_tokens_do_not_panic() {
        for tokens in [Value::Null, json!([]), json!({"colors": 5})] {
            let items = run(&tokens, "#004411");
            assert_eq!(items.len(), 5);
            let item = find(&items, "user:brandPrimaryMatch");
            assert!(!item.ok);
            assert_eq!(item.detail("tokenPrimary"), Some(&Value::Null));
        }
    }

    #[test]
    fn test_theme_mode_always_ok() {
        let items = run(&Value::Null, "#004411");
        let item = find(&items, "user:themeMode");
        assert!(item.ok);
        assert_eq!(item.detail("themeMode"), Some(&json!("dark")));
        assert!(item.message.contains("dark"));
    }

    #[test]
    fn test_numeric_preferences() {
        let tokens = json!({
            "typography": {"baseFontSize": 16, "scaleRatio": 1.25},
            "spacing": {"baseUnit": 6}
        });
        let items = run(&tokens, "#004411");
        assert!(find(&items, "user:baseFontSizeMatch").ok);
        assert!(find(&items, "user:scaleRatioMatch").ok);

        let unit = find(&items, "user:baseUnitMatch");
        assert!(!unit.ok);
        assert_eq!(unit.detail("expected"), Some(&json!(4.0)));
        assert_eq!(unit.detail("density"), Some(&json!("condensed")));
    }
}
