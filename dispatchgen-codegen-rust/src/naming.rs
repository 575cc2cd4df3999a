//! Rust identifiers for schema names.

use dispatchgen_core::{safe_ident, to_pascal_case, to_snake_case};

/// Path prefix of the runtime crate in generated code.
pub const RUNTIME: &str = "::dispatchgen_runtime";

/// Trait method and trampoline name: `GetWidget` -> `get_widget`.
pub fn fn_name(command: &str) -> String {
    safe_ident(&to_snake_case(command))
}

/// `Proc` variant name: `get_widget` -> `GetWidget`.
pub fn variant_name(command: &str) -> String {
    let pascal = to_pascal_case(command);
    if pascal.is_empty() {
        safe_ident(command)
    } else {
        safe_ident(&pascal)
    }
}

/// Parameter name, snake_case and keyword-safe.
pub fn param_name(param: &str) -> String {
    safe_ident(&to_snake_case(param))
}

/// Flag field for an extension: `X_color` -> `has_x_color`.
pub fn flag_field(extension: &str) -> String {
    format!("has_{}", to_snake_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_name() {
        assert_eq!(fn_name("GetWidget"), "get_widget");
        assert_eq!(fn_name("xrGetD3D11GraphicsRequirementsKHR"), "xr_get_d3d11_graphics_requirements_khr");
        assert_eq!(fn_name("Loop"), "r#loop");
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name("GetWidget"), "GetWidget");
        assert_eq!(variant_name("xrCreateInstance"), "XrCreateInstance");
        assert_eq!(variant_name("self"), "Self_");
    }

    #[test]
    fn test_param_name() {
        assert_eq!(param_name("createInfo"), "create_info");
        assert_eq!(param_name("type"), "r#type");
        assert_eq!(param_name("_out"), "out");
    }

    #[test]
    fn test_flag_field() {
        assert_eq!(flag_field("X_color"), "has_x_color");
        assert_eq!(flag_field("XR_KHR_D3D11_enable"), "has_xr_khr_d3d11_enable");
    }
}
