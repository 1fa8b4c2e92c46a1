//! Design Tokens
//!
//! Token document types and the structural schema they are checked against.

pub mod model;
pub mod schema;

pub use model::{
    ColorTokens, DesignTokens, SpacingTokens, TokenMeta, TypeSizes, TypographyTokens,
    KNOWN_COLOR_KEYS,
};
pub use schema::{shared_token_validator, token_document_rule, token_validator};
