//! Request Handler
//!
//! Translation only: request body in, response envelope out. Invalid user
//! constraints are a client error; anything unexpected is a server error.

use serde::Serialize;
use serde_json::{json, Value};

use crate::constraints::{analyze, derive, parse_user_constraints, DerivedValues, UserWarning};
use crate::schema::{FieldIssue, StructuralValidator};
use crate::validation::{Engine, ValidationReport};

/// Derived values and advisories returned next to the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub derived: DerivedValues,
    pub warnings: Vec<UserWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok {
        report: ValidationReport,
        analysis: Analysis,
    },
    InvalidConstraints {
        issues: Vec<FieldIssue>,
    },
    Failed {
        message: String,
    },
}

impl Response {
    /// HTTP-style status code
    pub fn status(&self) -> u16 {
        match self {
            Response::Ok { .. } => 200,
            Response::InvalidConstraints { .. } => 400,
            Response::Failed { .. } => 500,
        }
    }

    /// Process exit code for command-line use
    pub fn exit_code(&self) -> u8 {
        match self.status() {
            200 => 0,
            400 => 2,
            _ => 1,
        }
    }

    /// Response envelope
    pub fn to_json(&self) -> Value {
        match self {
            Response::Ok { report, analysis } => json!({
                "ok": true,
                "report": report,
                "analysis": analysis,
            }),
            Response::InvalidConstraints { issues } => json!({
                "ok": false,
                "error": "Invalid userConstraints",
                "issues": issues,
            }),
            Response::Failed { message } => json!({
                "ok": false,
                "error": "Failed to validate",
                "message": message,
            }),
        }
    }
}

/// Handle a parsed `{tokens, userConstraints}` body
pub fn handle_request<V: StructuralValidator>(body: &Value, engine: &Engine<V>) -> Response {
    let raw_constraints = &body["userConstraints"];
    let user = match parse_user_constraints(raw_constraints) {
        Ok(user) => user,
        Err(e) => {
            log::info!("rejecting request: {}", e);
            return Response::InvalidConstraints { issues: e.issues };
        }
    };

    let tokens = &body["tokens"];
    let report = engine.validate(tokens, &user);

    Response::Ok {
        report,
        analysis: Analysis {
            derived: derive(&user),
            warnings: analyze(&user),
        },
    }
}

/// Handle a raw request body
pub fn handle_raw<V: StructuralValidator>(raw: &str, engine: &Engine<V>) -> Response {
    match serde_json::from_str::<Value>(raw) {
        Ok(body) => handle_request(&body, engine),
        Err(e) => {
            log::error!("unreadable request body: {}", e);
            Response::Failed {
                message: e.to_string(),
            }
        }
    }
}
