//! System Constraint Spec
//!
//! Process-wide design rules: size bounds, spacing step order, contrast
//! floors per accessibility target, and the color pairs that must meet them.
//!
//! Loading priority: `--spec` file < user config directory < embedded default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SPEC_FILE_NAME};
use crate::tokens::KNOWN_COLOR_KEYS;

use super::user::AccessibilityTarget;

const EMBEDDED_SPEC: &str = include_str!("../../resources/system-spec.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConstraintSpec {
    pub typography: TypographyBounds,
    pub spacing: SpacingRules,
    pub contrast: ContrastThresholds,
    pub required_contrast_pairs: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyBounds {
    pub min_base_font_size: f64,
    pub max_base_font_size: f64,
    pub min_scale_ratio: f64,
    pub max_scale_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingRules {
    pub min_base_unit: f64,
    pub max_base_unit: f64,
    /// Step names in the order they must strictly increase
    pub steps: Vec<String>,
    pub monotonic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastThresholds {
    #[serde(rename = "AA")]
    pub aa: ContrastLevel,
    #[serde(rename = "AAA")]
    pub aaa: ContrastLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastLevel {
    pub normal_text: f64,
}

impl Default for SystemConstraintSpec {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SystemConstraintSpec {
    /// The embedded default spec
    pub fn builtin() -> Self {
        match Self::from_toml_str(EMBEDDED_SPEC) {
            Ok(spec) => spec,
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded system spec: {:#}. Using minimal fallback.",
                    e
                );
                Self::minimal()
            }
        }
    }

    /// Hard-coded fallback matching the embedded spec
    fn minimal() -> Self {
        let pair = |a: &str, b: &str| (a.to_string(), b.to_string());
        Self {
            typography: TypographyBounds {
                min_base_font_size: 10.0,
                max_base_font_size: 24.0,
                min_scale_ratio: 1.1,
                max_scale_ratio: 1.5,
            },
            spacing: SpacingRules {
                min_base_unit: 4.0,
                max_base_unit: 8.0,
                steps: ["xs", "sm", "md", "lg", "xl"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                monotonic: true,
            },
            contrast: ContrastThresholds {
                aa: ContrastLevel { normal_text: 4.5 },
                aaa: ContrastLevel { normal_text: 7.0 },
            },
            required_contrast_pairs: vec![
                pair("textPrimary", "background"),
                pair("textSecondary", "background"),
                pair("textPrimary", "surface"),
                pair("onPrimary", "primary"),
            ],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse system constraint spec")
    }

    /// Load a spec file, logging any consistency problems it has
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read system spec {}", path.display()))?;
        let spec = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid system spec {}", path.display()))?;

        for issue in spec.consistency_issues() {
            log::warn!("{}: {}", path.display(), issue);
        }
        log::info!("Loaded system spec from {}", path.display());

        Ok(spec)
    }

    /// Resolve the spec for this run from the configured locations
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(path) = &config.cli_spec {
            return Self::load(path);
        }

        for dir in &config.spec_dirs {
            let path = dir.join(SPEC_FILE_NAME);
            if path.is_file() {
                return Self::load(&path);
            }
        }

        log::debug!("No system spec file found, using embedded default");
        Ok(Self::builtin())
    }

    /// Minimum contrast ratio for normal text at the given target
    pub fn contrast_threshold(&self, target: AccessibilityTarget) -> f64 {
        match target {
            AccessibilityTarget::Aa => self.contrast.aa.normal_text,
            AccessibilityTarget::Aaa => self.contrast.aaa.normal_text,
        }
    }

    /// Problems that make the spec self-contradictory or drift from the
    /// token schema. Empty for a consistent spec.
    pub fn consistency_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let t = &self.typography;
        let s = &self.spacing;

        if t.min_base_font_size > t.max_base_font_size {
            issues.push(format!(
                "base font size bounds are inverted ({} > {})",
                t.min_base_font_size, t.max_base_font_size
            ));
        }
        if t.min_scale_ratio > t.max_scale_ratio {
            issues.push(format!(
                "scale ratio bounds are inverted ({} > {})",
                t.min_scale_ratio, t.max_scale_ratio
            ));
        }
        if s.min_base_unit > s.max_base_unit {
            issues.push(format!(
                "base unit bounds are inverted ({} > {})",
                s.min_base_unit, s.max_base_unit
            ));
        }

        if s.monotonic && s.steps.is_empty() {
            issues.push("monotonic spacing requested but no steps are listed".to_string());
        }
        for (idx, step) in s.steps.iter().enumerate() {
            if s.steps[..idx].contains(step) {
                issues.push(format!("spacing step '{}' is listed more than once", step));
            }
        }

        for (name, level) in [("AA", &self.contrast.aa), ("AAA", &self.contrast.aaa)] {
            if level.normal_text <= 0.0 {
                issues.push(format!(
                    "{} contrast threshold must be positive, got {}",
                    name, level.normal_text
                ));
            }
        }
        if self.contrast.aaa.normal_text < self.contrast.aa.normal_text {
            issues.push("AAA contrast threshold is lower than AA".to_string());
        }

        for (a, b) in &self.required_contrast_pairs {
            for key in [a, b] {
                if !KNOWN_COLOR_KEYS.iter().any(|known| known == key) {
                    issues.push(format!(
                        "contrast pair ({}, {}) names '{}', which is not a token color",
                        a, b, key
                    ));
                }
            }
        }

        issues
    }
}
