//! Schema and policy loading for the dispatchgen generator.
//!
//! The schema describes the API surface; the policy decides how each
//! command is treated. Both are TOML and report failures as `miette`
//! diagnostics pointing at the offending source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod policy;
mod schema;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use policy::{Handling, OutputConfig, Policy, SpecialEntry, VerySpecialEntry, parse_policy};
pub use schema::{Command, Param, Schema, parse_schema};
pub use validate::ParseContext;
