//! Schema Validator
//!
//! Walks a `serde_json::Value` against a [`Rule`] tree and collects every
//! violation. Never stops at the first error and never panics on input.

use serde::Serialize;
use serde_json::Value;

use super::rules::{Field, Rule};

/// One structural problem: where it is and what is wrong
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

/// Pass flag plus the normalized issue list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralOutcome {
    pub ok: bool,
    pub errors: Vec<FieldIssue>,
}

impl StructuralOutcome {
    pub fn from_errors(errors: Vec<FieldIssue>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }
}

/// Boundary contract for anything that can judge a document's shape
pub trait StructuralValidator {
    fn validate(&self, document: &Value) -> StructuralOutcome;
}

/// How instance paths are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/colors/primary`
    Pointer,
    /// `brand.primary`
    Dotted,
}

/// Rule-tree backed validator
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    root: Rule,
    style: PathStyle,
}

impl SchemaValidator {
    pub fn new(root: Rule, style: PathStyle) -> Self {
        Self { root, style }
    }
}

impl StructuralValidator for SchemaValidator {
    fn validate(&self, document: &Value) -> StructuralOutcome {
        let mut walk = Walk {
            style: self.style,
            instance: Vec::new(),
            schema: vec!["#".to_string()],
            errors: Vec::new(),
        };
        walk.check(&self.root, document);
        StructuralOutcome::from_errors(walk.errors)
    }
}

struct Walk {
    style: PathStyle,
    instance: Vec<String>,
    schema: Vec<String>,
    errors: Vec<FieldIssue>,
}

impl Walk {
    fn check(&mut self, rule: &Rule, value: &Value) {
        match rule {
            Rule::Object {
                fields,
                allow_unknown,
            } => match value.as_object() {
                Some(map) => {
                    for field in fields {
                        self.check_field(field, map.get(&field.name));
                    }
                    if !allow_unknown {
                        for key in map.keys() {
                            if !fields.iter().any(|f| &f.name == key) {
                                self.report(
                                    "additionalProperties",
                                    format!("must NOT have additional property '{}'", key),
                                );
                            }
                        }
                    }
                }
                None => self.type_mismatch(rule),
            },
            Rule::Array { items, max_items } => match value.as_array() {
                Some(elements) => {
                    if let Some(max) = max_items {
                        if elements.len() > *max {
                            self.report(
                                "maxItems",
                                format!("must NOT have more than {} items", max),
                            );
                        }
                    }
                    self.schema.push("items".to_string());
                    for (idx, element) in elements.iter().enumerate() {
                        self.instance.push(idx.to_string());
                        self.check(items, element);
                        self.instance.pop();
                    }
                    self.schema.pop();
                }
                None => self.type_mismatch(rule),
            },
            Rule::Number {
                min,
                max,
                exclusive_min,
            } => match value.as_f64() {
                Some(n) => {
                    if let Some(min) = min {
                        if n < *min {
                            self.report("minimum", format!("must be >= {}", min));
                        }
                    }
                    if let Some(max) = max {
                        if n > *max {
                            self.report("maximum", format!("must be <= {}", max));
                        }
                    }
                    if let Some(floor) = exclusive_min {
                        if n <= *floor {
                            self.report("exclusiveMinimum", format!("must be > {}", floor));
                        }
                    }
                }
                None => self.type_mismatch(rule),
            },
            Rule::String {
                min_len,
                max_len,
                pattern,
            } => match value.as_str() {
                Some(s) => {
                    let len = s.chars().count();
                    if let Some(min) = min_len {
                        if len < *min {
                            self.report(
                                "minLength",
                                format!("must NOT have fewer than {} characters", min),
                            );
                        }
                    }
                    if let Some(max) = max_len {
                        if len > *max {
                            self.report(
                                "maxLength",
                                format!("must NOT have more than {} characters", max),
                            );
                        }
                    }
                    if let Some(pattern) = pattern {
                        if !pattern.regex.is_match(s) {
                            let message = pattern.message.clone().unwrap_or_else(|| {
                                format!("must match pattern \"{}\"", pattern.regex.as_str())
                            });
                            self.report("pattern", message);
                        }
                    }
                }
                None => self.type_mismatch(rule),
            },
            Rule::Enum(allowed) => match value.as_str() {
                Some(s) if allowed.iter().any(|a| *a == s) => {}
                _ => self.report(
                    "enum",
                    format!(
                        "must be equal to one of the allowed values: {}",
                        allowed.join(", ")
                    ),
                ),
            },
        }
    }

    fn check_field(&mut self, field: &Field, value: Option<&Value>) {
        match value {
            Some(v) => {
                self.schema.push("properties".to_string());
                self.schema.push(field.name.clone());
                self.instance.push(field.name.clone());
                self.check(&field.rule, v);
                self.instance.pop();
                self.schema.pop();
                self.schema.pop();
            }
            None if field.required => {
                let message = format!("must have required property '{}'", field.name);
                match self.style {
                    // Dotted paths index the missing field itself
                    PathStyle::Dotted => {
                        self.instance.push(field.name.clone());
                        self.report("required", message);
                        self.instance.pop();
                    }
                    PathStyle::Pointer => self.report("required", message),
                }
            }
            None => {}
        }
    }

    fn type_mismatch(&mut self, rule: &Rule) {
        self.report("type", format!("must be {}", rule.type_name()));
    }

    /// Record an issue at the current instance path, falling back to the
    /// schema-rule path at the document root.
    fn report(&mut self, keyword: &str, message: String) {
        let path = if self.instance.is_empty() {
            format!("{}/{}", self.schema.join("/"), keyword)
        } else {
            match self.style {
                PathStyle::Pointer => self
                    .instance
                    .iter()
                    .map(|seg| format!("/{}", seg.replace('~', "~0").replace('/', "~1")))
                    .collect::<String>(),
                PathStyle::Dotted => self.instance.join("."),
            }
        };
        self.errors.push(FieldIssue { path, message });
    }
}
