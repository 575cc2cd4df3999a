//! Types the widget API speaks. The generated layer glob-imports this module.

use std::fmt;

use dispatchgen_runtime::ResultCode;

/// Result codes returned by every widget entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetResult {
    Success,
    NotFound,
    Busy,
    RuntimeFailure,
    FunctionUnsupported,
}

impl fmt::Display for WidgetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            WidgetResult::Success => "success",
            WidgetResult::NotFound => "not-found",
            WidgetResult::Busy => "busy",
            WidgetResult::RuntimeFailure => "runtime-failure",
            WidgetResult::FunctionUnsupported => "function-unsupported",
        };
        f.write_str(code)
    }
}

impl ResultCode for WidgetResult {
    const SUCCESS: Self = WidgetResult::Success;
    const RUNTIME_FAILURE: Self = WidgetResult::RuntimeFailure;
    const FUNCTION_UNSUPPORTED: Self = WidgetResult::FunctionUnsupported;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Widget {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
