//! Compilation pipeline for the dispatch layer.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the phases
//! from parsed inputs to the IR the emitters consume. The pipeline provides:
//!
//! - Explicit phase boundaries (validate → lower)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use dispatchgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(schema, policy)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
