//! Core utilities and types for the dispatchgen generator.
//!
//! This crate provides the file-writing primitives, the fixed headers every
//! generated artifact carries, and identifier case conversion shared by the
//! rest of the workspace.

mod codegen;
mod file;
mod header;
mod utils;

pub use codegen::{GenerateResult, LanguageCodegen, PreviewFile};
// File operations
pub use file::{GeneratedFile, write_all};
pub use header::{GENERATED_HEADER, LICENSE_HEADER, artifact_header};
// String utilities
pub use utils::{RUST_KEYWORDS, is_rust_keyword, safe_ident, to_pascal_case, to_snake_case};
