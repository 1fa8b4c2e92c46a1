//! Schema Rule Types
//!
//! A small rule tree: objects with named fields, bounded arrays, bounded
//! numbers, patterned strings and closed enumerations.

use regex::Regex;

/// Shape constraint for a single JSON value
#[derive(Debug, Clone)]
pub enum Rule {
    Object {
        fields: Vec<Field>,
        allow_unknown: bool,
    },
    Array {
        items: Box<Rule>,
        max_items: Option<usize>,
    },
    Number {
        min: Option<f64>,
        max: Option<f64>,
        exclusive_min: Option<f64>,
    },
    String {
        min_len: Option<usize>,
        max_len: Option<usize>,
        pattern: Option<Pattern>,
    },
    Enum(Vec<&'static str>),
}

/// Compiled regex plus the message shown when it does not match
#[derive(Debug, Clone)]
pub struct Pattern {
    pub regex: Regex,
    pub message: Option<String>,
}

/// Named property of an object rule
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub rule: Rule,
    pub required: bool,
}

impl Field {
    pub fn required(name: &str, rule: Rule) -> Self {
        Self {
            name: name.to_string(),
            rule,
            required: true,
        }
    }

    pub fn optional(name: &str, rule: Rule) -> Self {
        Self {
            name: name.to_string(),
            rule,
            required: false,
        }
    }
}

impl Rule {
    /// Object that tolerates properties it does not name
    pub fn object(fields: Vec<Field>) -> Self {
        Rule::Object {
            fields,
            allow_unknown: true,
        }
    }

    /// Object that rejects properties it does not name
    pub fn closed_object(fields: Vec<Field>) -> Self {
        Rule::Object {
            fields,
            allow_unknown: false,
        }
    }

    pub fn array(items: Rule, max_items: Option<usize>) -> Self {
        Rule::Array {
            items: Box::new(items),
            max_items,
        }
    }

    pub fn number() -> Self {
        Rule::Number {
            min: None,
            max: None,
            exclusive_min: None,
        }
    }

    /// Number within the inclusive range `[min, max]`
    pub fn number_in(min: f64, max: f64) -> Self {
        Rule::Number {
            min: Some(min),
            max: Some(max),
            exclusive_min: None,
        }
    }

    /// Number strictly greater than zero
    pub fn positive_number() -> Self {
        Rule::Number {
            min: None,
            max: None,
            exclusive_min: Some(0.0),
        }
    }

    pub fn string() -> Self {
        Rule::String {
            min_len: None,
            max_len: None,
            pattern: None,
        }
    }

    pub fn string_len(min_len: usize, max_len: usize) -> Self {
        Rule::String {
            min_len: Some(min_len),
            max_len: Some(max_len),
            pattern: None,
        }
    }

    pub fn non_empty_string() -> Self {
        Rule::String {
            min_len: Some(1),
            max_len: None,
            pattern: None,
        }
    }

    /// String matching `regex`; panics only on a malformed static pattern
    pub fn matching(regex: &str, message: Option<&str>) -> Self {
        Rule::String {
            min_len: None,
            max_len: None,
            pattern: Some(Pattern {
                regex: Regex::new(regex).expect("schema pattern compiles"),
                message: message.map(str::to_string),
            }),
        }
    }

    pub fn one_of(values: &[&'static str]) -> Self {
        Rule::Enum(values.to_vec())
    }

    /// JSON type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Rule::Object { .. } => "object",
            Rule::Array { .. } => "array",
            Rule::Number { .. } => "number",
            Rule::String { .. } | Rule::Enum(_) => "string",
        }
    }
}
