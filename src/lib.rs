//! Design Token Validator
//!
//! Judges a machine-generated set of design tokens against a fixed system
//! rule table and a user's declared constraints, producing one structured
//! report.
//!
//! This library provides:
//! - WCAG color science (luminance, contrast)
//! - Structural schema validation for token and constraint documents
//! - System rule checks (contrast pairs, typography and spacing bounds)
//! - User constraint analysis and soft adherence checks
//! - A translation-only request handler

pub mod color;
pub mod config;
pub mod constraints;
pub mod handler;
pub mod schema;
pub mod tokens;
pub mod validation;

// Re-exports for clean public API
pub use color::{contrast_ratio, relative_luminance, ColorError};
pub use config::Config;
pub use constraints::{parse_user_constraints, SystemConstraintSpec, UserConstraints};
pub use handler::{handle_raw, handle_request, Response};
pub use tokens::DesignTokens;
pub use validation::{validate_tokens, Engine, ValidationItem, ValidationReport};
