//! Run-time support for dispatch layers generated by `dispatchgen`.
//!
//! Generated artifacts stay declarative and call into this crate for the
//! behavior every entry point shares:
//!
//! - [`forward`] and [`forward_void`] wrap one call into the implementation,
//!   trace it, and turn errors and panics into a result code.
//! - [`ProcTable`] maps entry-point names to typed function references,
//!   optionally gated on extension flags.
//! - [`ExtensionFlag`] is the per-extension "active" switch.

mod extension;
mod proc_table;
mod result_code;
mod trampoline;

pub use eyre;
pub use extension::ExtensionFlag;
pub use proc_table::{Gate, ProcTable};
pub use result_code::ResultCode;
pub use trampoline::{forward, forward_void};

/// Result type returned by every generated interface method.
pub type Result<T> = eyre::Result<T>;
