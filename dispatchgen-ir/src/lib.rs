//! Intermediate representation types for the dispatchgen generator.
//!
//! ```text
//! schema + policy (dispatchgen-manifest) -> DispatchIR (dispatchgen-ir) -> emitters
//! ```
//!
//! The IR is what emitters consume: no policy lookups, no filtering, just the
//! commands that make it into the generated layer and how each is provided.

mod dispatch;

pub use dispatch::{CommandIR, DispatchIR, DispatchMeta, Extension, ParamIR, Trampoline};
