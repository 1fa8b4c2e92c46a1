//! Validation Engine
//!
//! System rule checks, user adherence and report aggregation, kept apart
//! from schema and I/O concerns.

pub mod adherence;
pub mod checker;
pub mod engine;
pub mod item;
pub mod report;

pub use engine::{validate_tokens, Engine};
pub use item::ValidationItem;
pub use report::{Summary, ValidationReport};

// Re-export common types
pub use checker::SystemResults;
