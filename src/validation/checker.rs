//! System Constraint Checker
//!
//! Runs the fixed battery of system rules over structurally valid tokens.
//! Every rule yields exactly one item; a violated rule is a failing item,
//! never an error, and never stops the remaining checks.

use serde_json::json;

use crate::color::{contrast_ratio, Rgb};
use crate::constraints::{AccessibilityTarget, SystemConstraintSpec};
use crate::tokens::DesignTokens;

use super::item::ValidationItem;

/// Items produced by the system checks, grouped by rule family
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemResults {
    pub contrast: Vec<ValidationItem>,
    pub typography: Vec<ValidationItem>,
    pub spacing: Vec<ValidationItem>,
}

impl SystemResults {
    /// No checks were attempted
    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationItem> {
        self.contrast
            .iter()
            .chain(&self.typography)
            .chain(&self.spacing)
    }

    pub fn failures(&self) -> usize {
        self.iter().filter(|item| !item.ok).count()
    }
}

/// Run every system check against the tokens
pub fn run_system_checks(
    tokens: &DesignTokens,
    spec: &SystemConstraintSpec,
    target: AccessibilityTarget,
) -> SystemResults {
    SystemResults {
        contrast: check_contrast(tokens, spec, target),
        typography: check_typography(tokens, spec),
        spacing: check_spacing(tokens, spec),
    }
}

pub fn check_contrast(
    tokens: &DesignTokens,
    spec: &SystemConstraintSpec,
    target: AccessibilityTarget,
) -> Vec<ValidationItem> {
    let threshold = spec.contrast_threshold(target);
    let mut items = Vec::with_capacity(spec.required_contrast_pairs.len());

    for (key_a, key_b) in &spec.required_contrast_pairs {
        let id = format!("contrast:{}-{}", key_a, key_b);
        let color_a = tokens.colors.get(key_a);
        let color_b = tokens.colors.get(key_b);

        let (color_a, color_b) = match (color_a, color_b) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                let missing: Vec<&str> = [(key_a, color_a), (key_b, color_b)]
                    .into_iter()
                    .filter(|(_, color)| color.is_none())
                    .map(|(key, _)| key.as_str())
                    .collect();
                log::debug!("{}: missing {:?}", id, missing);
                items.push(
                    ValidationItem::new(
                        id,
                        false,
                        format!(
                            "Missing color(s) for contrast pair ({}, {}): {}.",
                            key_a,
                            key_b,
                            missing.join(", ")
                        ),
                    )
                    .with_details(json!({
                        "colorAKey": key_a,
                        "colorBKey": key_b,
                        "missing": missing,
                    })),
                );
                continue;
            }
        };

        let ratio = match contrast_ratio(color_a, color_b) {
            Ok(ratio) => ratio,
            Err(e) => {
                // Unparsable colors count as unresolved references
                let invalid: Vec<&str> = [(key_a, color_a), (key_b, color_b)]
                    .into_iter()
                    .filter(|(_, color)| Rgb::from_hex(color).is_err())
                    .map(|(key, _)| key.as_str())
                    .collect();
                log::debug!("{}: {}", id, e);
                items.push(
                    ValidationItem::new(
                        id,
                        false,
                        format!(
                            "Invalid color(s) for contrast pair ({}, {}): {}.",
                            key_a,
                            key_b,
                            invalid.join(", ")
                        ),
                    )
                    .with_details(json!({
                        "colorAKey": key_a,
                        "colorBKey": key_b,
                        "colorA": color_a,
                        "colorB": color_b,
                        "invalid": invalid,
                    })),
                );
                continue;
            }
        };

        let ok = ratio >= threshold;
        let message = if ok {
            format!(
                "Contrast({}, {}) meets target ({:.2} >= {}).",
                key_a, key_b, ratio, threshold
            )
        } else {
            format!(
                "Contrast({}, {}) does not meet target ({:.2} < {}).",
                key_a, key_b, ratio, threshold
            )
        };
        log::debug!("{}: ratio {:.2}, threshold {}", id, ratio, threshold);

        items.push(ValidationItem::new(id, ok, message).with_details(json!({
            "colorA": color_a,
            "colorB": color_b,
            "ratio": ratio,
            "threshold": threshold,
            "colorAKey": key_a,
            "colorBKey": key_b,
        })));
    }

    items
}

pub fn check_typography(tokens: &DesignTokens, spec: &SystemConstraintSpec) -> Vec<ValidationItem> {
    let bounds = &spec.typography;
    let base = tokens.typography.base_font_size;
    let ratio = tokens.typography.scale_ratio;

    vec![
        ValidationItem::new(
            "typography:baseFontSize",
            within(base, bounds.min_base_font_size, bounds.max_base_font_size),
            format!(
                "Base font size {}px must be within [{}px, {}px].",
                base, bounds.min_base_font_size, bounds.max_base_font_size
            ),
        )
        .with_details(json!({
            "base": base,
            "min": bounds.min_base_font_size,
            "max": bounds.max_base_font_size,
        })),
        ValidationItem::new(
            "typography:scaleRatio",
            within(ratio, bounds.min_scale_ratio, bounds.max_scale_ratio),
            format!(
                "Scale ratio {} must be within [{}, {}].",
                ratio, bounds.min_scale_ratio, bounds.max_scale_ratio
            ),
        )
        .with_details(json!({
            "ratio": ratio,
            "min": bounds.min_scale_ratio,
            "max": bounds.max_scale_ratio,
        })),
    ]
}

pub fn check_spacing(tokens: &DesignTokens, spec: &SystemConstraintSpec) -> Vec<ValidationItem> {
    let rules = &spec.spacing;
    let base_unit = tokens.spacing.base_unit;
    let mut items = vec![ValidationItem::new(
        "spacing:baseUnit",
        within(base_unit, rules.min_base_unit, rules.max_base_unit),
        format!(
            "Base unit {}px must be within [{}px, {}px].",
            base_unit, rules.min_base_unit, rules.max_base_unit
        ),
    )
    .with_details(json!({
        "baseUnit": base_unit,
        "min": rules.min_base_unit,
        "max": rules.max_base_unit,
    }))];

    if rules.monotonic {
        items.push(check_monotonic(tokens, &rules.steps));
    }

    items
}

/// Strict increase across the named steps, judged only when every step
/// resolves to a number
fn check_monotonic(tokens: &DesignTokens, steps: &[String]) -> ValidationItem {
    let resolved: Vec<(&str, Option<f64>)> = steps
        .iter()
        .map(|name| (name.as_str(), tokens.spacing.step(name)))
        .collect();

    let missing: Vec<&str> = resolved
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return ValidationItem::new(
            "spacing:monotonic",
            false,
            format!(
                "Spacing scale is missing one or more required steps: {}.",
                missing.join(", ")
            ),
        )
        .with_details(json!({ "missing": missing }));
    }

    let values: Vec<f64> = resolved.iter().filter_map(|(_, value)| *value).collect();
    let ok = values.windows(2).all(|pair| pair[1] > pair[0]);

    let message = if ok {
        "Spacing scale is monotonic increasing.".to_string()
    } else {
        match (steps.first(), steps.last()) {
            (Some(first), Some(last)) => format!(
                "Spacing scale must be strictly increasing from {} to {}.",
                first, last
            ),
            _ => "Spacing scale must be strictly increasing.".to_string(),
        }
    };

    ValidationItem::new("spacing:monotonic", ok, message)
        .with_details(json!({ "steps": steps, "values": values }))
}

fn within(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}
