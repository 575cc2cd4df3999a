//! Rust AST builders for the items a dispatch layer is made of.
//!
//! Every builder implements [`Renderable`](dispatchgen_codegen::builder::Renderable),
//! so a [`RustFile`](crate::RustFile) can lay them out with blank lines in
//! between.

mod enums;
mod fns;
mod impls;
mod matches;
mod structs;
mod traits;

pub use enums::{Enum, Variant};
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use matches::{Arm, Match};
pub use structs::{Field, Struct};
pub use traits::Trait;
