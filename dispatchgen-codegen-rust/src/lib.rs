//! Rust emitter for dispatchgen.
//!
//! Turns a [`DispatchIR`](dispatchgen_ir::DispatchIR) into two source files,
//! an interface artifact and an implementation artifact, that the consumer
//! `include!`s side by side.

mod generator;
mod naming;
mod rust_file;

pub mod ast;
pub mod files;

pub use ast::{Arm, Enum, Field, Fn, Impl, Match, Param, Struct, Trait, Variant};
pub use dispatchgen_core::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::{flag_field, fn_name, param_name, variant_name};
pub use rust_file::{RustFile, Use};
