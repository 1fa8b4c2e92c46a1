//! Validation Items

use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome of a single rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationItem {
    pub id: String,
    pub ok: bool,
    pub message: String,
    /// Raw values the judgment was based on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl ValidationItem {
    pub fn new(id: impl Into<String>, ok: bool, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ok,
            message: message.into(),
            details: None,
        }
    }

    /// Attach details; anything other than a JSON object is ignored
    pub fn with_details(mut self, details: Value) -> Self {
        if let Value::Object(map) = details {
            self.details = Some(map);
        }
        self
    }

    /// Look up one detail value
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref()?.get(key)
    }
}
