//! Structural Schema
//!
//! Declarative shape rules for JSON documents and a validator that reports
//! every violation as a path/message pair.

pub mod rules;
pub mod validator;

pub use rules::{Field, Rule};
pub use validator::{FieldIssue, PathStyle, SchemaValidator, StructuralOutcome, StructuralValidator};
