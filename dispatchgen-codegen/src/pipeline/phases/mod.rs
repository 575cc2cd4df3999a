//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - cross-checks the policy against the schema
//! - [`LowerPhase`] - turns schema and policy into the dispatch IR

mod lower;
mod validate;

pub use lower::{LowerPhase, lower};
pub use validate::{
    IdentifierCollisionLint, Lint, LintInfo, MissingNamespaceLint, MissingOverrideLint,
    OverlappingPolicyLint, SilentWithoutResultLint, UnknownPolicyCommandLint,
    UnsupportedExtensionLint, UnusedExtensionLint, ValidatePhase,
};
