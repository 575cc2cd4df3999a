//! Language-agnostic half of the dispatchgen generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - Validation lints and lowering to the dispatch IR
//! - [`testing`] - Test fixtures (feature-gated)

pub mod builder;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
