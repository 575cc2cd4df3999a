//! Shared utility functions for code generation.

/// Rust reserved keywords that cannot be used as bare identifiers.
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers either.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Check if a name is a Rust keyword
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Escape keywords as raw identifiers (`type` -> `r#type`).
///
/// `self`, `Self`, `super` and `crate` have no raw form and get a trailing
/// underscore instead.
pub fn safe_ident(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else if is_rust_keyword(name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Convert a string to snake_case.
///
/// Handles camelCase, PascalCase, acronyms and digit runs so that API names
/// map to readable identifiers: `xrGetD3D11GraphicsRequirementsKHR` becomes
/// `xr_get_d3d11_graphics_requirements_khr`.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 && !result.is_empty() && !result.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || ((prev.is_uppercase() || prev.is_ascii_digit()) && next_is_lower);
            if boundary {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    while result.ends_with('_') {
        result.pop();
    }
    result
}

/// Convert a string to PascalCase (e.g., "get_widget" -> "GetWidget")
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("GetWidgetColor"), "get_widget_color");
        assert_eq!(to_snake_case("createInfo"), "create_info");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_acronyms() {
        assert_eq!(
            to_snake_case("xrGetD3D11GraphicsRequirementsKHR"),
            "xr_get_d3d11_graphics_requirements_khr"
        );
        assert_eq!(to_snake_case("XR_KHR_D3D11_enable"), "xr_khr_d3d11_enable");
        assert_eq!(to_snake_case("XR_KHR_vulkan_enable2"), "xr_khr_vulkan_enable2");
        assert_eq!(to_snake_case("X_color"), "x_color");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
    }

    #[test]
    fn test_to_snake_case_collapses_separators() {
        assert_eq!(to_snake_case("a__b"), "a_b");
        assert_eq!(to_snake_case("_lead"), "lead");
        assert_eq!(to_snake_case("trail_"), "trail");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("GetWidget"), "GetWidget");
        assert_eq!(to_pascal_case("xrCreateInstance"), "XrCreateInstance");
        assert_eq!(to_pascal_case("xrGetD3D11GraphicsRequirementsKHR"), "XrGetD3d11GraphicsRequirementsKhr");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_safe_ident() {
        assert_eq!(safe_ident("type"), "r#type");
        assert_eq!(safe_ident("self"), "self_");
        assert_eq!(safe_ident("widget"), "widget");
    }
}
