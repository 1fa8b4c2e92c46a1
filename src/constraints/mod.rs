//! Constraints
//!
//! User-declared preferences and the fixed system-level rule table.

pub mod analyzer;
pub mod system;
pub mod user;

pub use analyzer::{
    analyze, derive, expand, DerivedValues, ExpandedConstraints, Severity, UserWarning,
};
pub use system::SystemConstraintSpec;
pub use user::{
    parse_user_constraints, AccessibilityTarget, InvalidConstraints, ScalePreset, ThemeMode,
    UserConstraints,
};
