//! The two artifacts of a dispatch layer.
//!
//! Both are meant to be `include!`d into the same module of the consumer
//! crate, and both glob-import the configured namespace.

mod dispatch_rs;
mod interface_rs;

pub use dispatch_rs::DispatchRs;
pub use interface_rs::InterfaceRs;

use crate::Use;

/// `use <namespace>::*;`, tolerated when the namespace is not needed.
fn namespace_use(namespace: &str) -> Use {
    Use::glob(namespace).allow_unused()
}

/// Groups items under a `// <extensions>` comment.
fn section_title(requires: &[String]) -> Option<String> {
    if requires.is_empty() {
        None
    } else {
        Some(requires.join(" + "))
    }
}
