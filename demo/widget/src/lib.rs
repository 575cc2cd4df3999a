//! A widget registry served through a generated dispatch layer.
//!
//! `build.rs` turns `widget.toml` and `policy.toml` into the interface and
//! dispatch artifacts, which [`layer`] includes. Callers resolve entry points
//! by name through [`get_proc_addr`] and call them with a `&dyn WidgetApi`.

pub mod registry;
pub mod special;
pub mod widget;

/// The generated layer.
pub mod layer {
    include!(concat!(env!("OUT_DIR"), "/interface.rs"));
    include!(concat!(env!("OUT_DIR"), "/dispatch.rs"));
}

pub use layer::{Extensions, Proc, WidgetApi, get_proc_addr};
pub use registry::WidgetRegistry;
pub use widget::{Color, Widget, WidgetResult};
