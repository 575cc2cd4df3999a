//! Test fixtures for the pipeline and for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use dispatchgen_manifest::{Policy, Schema};

/// The widget API: two core commands, one void command, one extension
/// command, and one command gated on an extension the policy leaves out.
pub const WIDGET_SCHEMA: &str = r#"
[[commands]]
name = "GetWidget"
params = [{ name = "id", type = "u32" }, { name = "out", type = "&mut Widget" }]

[[commands]]
name = "ResetWidgets"
returns = false

[[commands]]
name = "GetWidgetColor"
params = [{ name = "id", type = "u32" }, { name = "out", type = "&mut Color" }]
requires = ["X_color"]

[[commands]]
name = "GetWidgetShape"
params = [{ name = "id", type = "u32" }]
requires = ["X_shape"]
"#;

/// Policy for [`WIDGET_SCHEMA`]: supports `X_color` only and silences
/// `NotFound` on `GetWidget`.
pub const WIDGET_POLICY: &str = r#"
extensions = ["X_color"]

[output]
namespace = "crate::widget"
trait_name = "WidgetApi"
result_type = "WidgetResult"
resolver = "GetProcAddr"

[silent]
GetWidget = ["NotFound"]
"#;

/// Parse a schema, panicking on error.
pub fn schema(src: &str) -> Schema {
    Schema::from_str_with_filename(src, "schema.toml")
        .unwrap_or_else(|e| panic!("invalid test schema: {}", e))
}

/// Parse a policy, panicking on error.
pub fn policy(src: &str) -> Policy {
    Policy::from_str_with_filename(src, "policy.toml")
        .unwrap_or_else(|e| panic!("invalid test policy: {}", e))
}

pub fn widget_schema() -> Schema {
    schema(WIDGET_SCHEMA)
}

pub fn widget_policy() -> Policy {
    policy(WIDGET_POLICY)
}

/// [`WIDGET_POLICY`] with extra TOML appended (tables, or top-level keys
/// when `prefix` is true).
pub fn widget_policy_with(extra: &str, prefix: bool) -> Policy {
    if prefix {
        policy(&format!("{}\n{}", extra, WIDGET_POLICY))
    } else {
        policy(&format!("{}\n{}", WIDGET_POLICY, extra))
    }
}
