//! User Constraint Analyzer
//!
//! Derives numeric values implied by the user's named presets and raises
//! advisory warnings for risky combinations. Nothing here blocks validation.

use serde::Serialize;

use super::user::{AccessibilityTarget, Density, ScalePreset, UserConstraints};

/// Severity of an advisory warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Non-blocking note about the user's constraint choices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWarning {
    pub code: &'static str,
    pub message: String,
    pub severity: Severity,
}

/// Values implied by the named presets
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedValues {
    pub scale_ratio: f64,
    pub base_unit: f64,
}

/// User constraints together with what they imply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedConstraints {
    #[serde(flatten)]
    pub constraints: UserConstraints,
    pub derived: DerivedValues,
}

pub const AAA_STRICT: &str = "AAA_STRICT";
pub const SMALL_FONT_SIZE: &str = "SMALL_FONT_SIZE";

const MIN_BASE_FONT_SIZE: f64 = 10.0;

impl ScalePreset {
    /// Modular scale ratio for this preset
    pub fn ratio(self) -> f64 {
        match self {
            ScalePreset::Compact => 1.125,
            ScalePreset::Balanced => 1.25,
            ScalePreset::Expressive => 1.333,
            ScalePreset::Loose => 1.5,
        }
    }
}

impl Density {
    /// Base spacing unit in px for this density
    pub fn base_unit(self) -> f64 {
        match self {
            Density::Condensed => 4.0,
            Density::Normal => 6.0,
            Density::Spacious => 8.0,
        }
    }
}

pub fn derive(input: &UserConstraints) -> DerivedValues {
    DerivedValues {
        scale_ratio: input.typography.scale_preset.ratio(),
        base_unit: input.spacing.density.base_unit(),
    }
}

pub fn expand(input: UserConstraints) -> ExpandedConstraints {
    let derived = derive(&input);
    ExpandedConstraints {
        constraints: input,
        derived,
    }
}

/// Advisory warnings for the given constraints, in a stable order
pub fn analyze(input: &UserConstraints) -> Vec<UserWarning> {
    let mut warnings = Vec::new();

    if input.accessibility_target == AccessibilityTarget::Aaa {
        warnings.push(UserWarning {
            code: AAA_STRICT,
            severity: Severity::Info,
            message: "You have selected AAA accessibility target, which is very strict. \
                      Some brand colors may require adjustments in derived tokens \
                      (e.g., button text color) to meet contrast requirements."
                .to_string(),
        });
    }

    if input.typography.base_font_size == MIN_BASE_FONT_SIZE
        && input.typography.scale_preset == ScalePreset::Expressive
    {
        warnings.push(UserWarning {
            code: SMALL_FONT_SIZE,
            severity: Severity::Warning,
            message: format!(
                "You have selected the minimum base font size ({}px) with an expressive \
                 scale preset. This combination may result in very small text that is \
                 hard to read. The system may clamp sizes to preserve legibility.",
                MIN_BASE_FONT_SIZE
            ),
        });
    }

    log::debug!("constraint analysis produced {} warning(s)", warnings.len());
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::user::parse_user_constraints;
    use serde_json::json;

    fn constraints(target: &str, base: f64, preset: &str, density: &str) -> UserConstraints {
        parse_user_constraints(&json!({
            "themeMode": "light",
            "accessibilityTarget": target,
            "brand": {"primary": "#004411"},
            "typography": {"baseFontSize": base, "scalePreset": preset},
            "spacing": {"density": density}
        }))
        .expect("valid constraints")
    }

    #[test]
    fn test_preset_and_density_tables() {
        assert_eq!(ScalePreset::Compact.ratio(), 1.125);
        assert_eq!(ScalePreset::Balanced.ratio(), 1.25);
        assert_eq!(ScalePreset::Expressive.ratio(), 1.333);
        assert_eq!(ScalePreset::Loose.ratio(), 1.5);
        assert_eq!(Density::Condensed.base_unit(), 4.0);
        assert_eq!(Density::Normal.base_unit(), 6.0);
        assert_eq!(Density::Spacious.base_unit(), 8.0);
    }

    #[test]
    fn test_derive_balanced_spacious() {
        let derived = derive(&constraints("AA", 16.0, "balanced", "spacious"));
        assert_eq!(derived.scale_ratio, 1.25);
        assert_eq!(derived.base_unit, 8.0);
    }

    #[test]
    fn test_small_font_warning_only_at_minimum() {
        let warnings = analyze(&constraints("AA", 10.0, "expressive", "normal"));
        let small = warnings.iter().find(|w| w.code == SMALL_FONT_SIZE).unwrap();
        assert_eq!(small.severity, Severity::Warning);

        let warnings = analyze(&constraints("AA", 16.0, "expressive", "normal"));
        assert!(warnings.iter().all(|w| w.code != SMALL_FONT_SIZE));

        let warnings = analyze(&constraints("AA", 10.0, "balanced", "normal"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_aaa_always_informs() {
        let warnings = analyze(&constraints("AAA", 16.0, "balanced", "normal"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, AAA_STRICT);
        assert_eq!(warnings[0].severity, Severity::Info);
    }

    #[test]
    fn test_expand_serializes_flat_with_derived() {
        let expanded = expand(constraints("AA", 16.0, "loose", "condensed"));
        let value = serde_json::to_value(&expanded).unwrap();
        assert_eq!(value["themeMode"], "light");
        assert_eq!(value["derived"]["scaleRatio"], 1.5);
        assert_eq!(value["derived"]["baseUnit"], 4.0);
    }
}
