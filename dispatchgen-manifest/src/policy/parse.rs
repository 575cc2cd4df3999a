//! Policy parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Policy;
use crate::{Error, Result, error::SourceContext, validate::ParseContext};

impl FromStr for Policy {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_policy(s, "policy.toml")
    }
}

impl Policy {
    /// Parse a policy file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_policy(&content, &path.display().to_string())
    }

    /// Parse a policy from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_policy(content, filename)
    }
}

/// Parse a policy from content with the given filename for error reporting.
///
/// Only checks what the policy can check alone. Cross-checks against the
/// schema are lints run by the generation pipeline.
pub fn parse_policy(content: &str, filename: &str) -> Result<Policy> {
    let source_ctx = SourceContext::new(content, filename);
    let policy: Policy = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_policy(&policy, content, filename)?;
    Ok(policy)
}

fn validate_policy(policy: &Policy, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let output = &policy.output;

    let out_ctx = ctx.push("output");
    if let Some(namespace) = &output.namespace {
        out_ctx.validate_path(namespace, "namespace")?;
    }
    out_ctx.validate_type_name(&output.trait_name, "trait")?;
    out_ctx.validate_type_name(&output.result_type, "result type")?;
    out_ctx.validate_name(&output.resolver, "resolver", None)?;
    for file in [&output.interface_file, &output.dispatch_file] {
        if file.trim().is_empty() {
            return Err(ctx
                .source_context()
                .validation_error("output file names cannot be empty"));
        }
    }
    if output.interface_file == output.dispatch_file {
        return Err(ctx.source_context().validation_error(format!(
            "interface_file and dispatch_file are both '{}'",
            output.interface_file
        )));
    }

    ctx.check_unique(&policy.extensions, "extension")?;
    for ext in &policy.extensions {
        ctx.validate_spanned(ext, "extension")?;
    }

    ctx.check_unique(&policy.excluded, "excluded command")?;

    for (command, codes) in &policy.silent {
        let silent_ctx = ctx.push(command);
        for code in codes {
            silent_ctx.validate_name(code, "silent result code", None)?;
        }
    }

    for (command, entry) in &policy.special {
        if let Some(path) = &entry.trampoline {
            ctx.push(command).validate_path(path, "trampoline")?;
        }
    }

    for (command, entry) in &policy.very_special {
        if let Some(path) = &entry.trampoline {
            ctx.push(command).validate_path(path, "trampoline")?;
        }
        let Some(signature) = &entry.signature else {
            continue;
        };
        if !signature.trim_start().starts_with("fn ") {
            return Err(ctx.source_context().validation_error_at(
                format!("signature of '{}' must start with 'fn '", command),
                ctx.find_span(command).unwrap_or_else(|| (0, 0).into()),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Handling;

    const POLICY: &str = r#"
extensions = ["X_color", "X_shape"]
excluded = ["DebugDump"]

[output]
namespace = "crate::widget"
trait_name = "WidgetApi"
result_type = "WidgetResult"
resolver = "GetProcAddr"

[special.DestroyWidget]
trampoline = "crate::widget::destroy_widget"

[very_special.CreateWidget]
trampoline = "crate::widget::create_widget"
signature = "fn create_widget(&self, info: &WidgetInfo) -> eyre::Result<WidgetResult>;"

[silent]
GetWidget = ["NotFound"]
"#;

    #[test]
    fn test_parse_policy() {
        let policy: Policy = POLICY.parse().unwrap();
        assert_eq!(policy.output.trait_name, "WidgetApi");
        assert_eq!(policy.namespace(), Some("crate::widget"));
        assert_eq!(policy.output.interface_file, "interface.rs");
        assert_eq!(policy.output.dispatch_file, "dispatch.rs");
        assert_eq!(
            policy.extensions().collect::<Vec<_>>(),
            vec!["X_color", "X_shape"]
        );
    }

    #[test]
    fn test_handling() {
        let policy: Policy = POLICY.parse().unwrap();
        assert_eq!(policy.handling("DebugDump"), Handling::Excluded);
        assert_eq!(policy.handling("DestroyWidget"), Handling::Special);
        assert_eq!(policy.handling("CreateWidget"), Handling::VerySpecial);
        assert_eq!(policy.handling("GetWidget"), Handling::Generated);
    }

    #[test]
    fn test_replacement_trampoline() {
        let policy: Policy = POLICY.parse().unwrap();
        assert_eq!(
            policy.replacement_trampoline("DestroyWidget"),
            Some("crate::widget::destroy_widget")
        );
        assert_eq!(
            policy.replacement_trampoline("CreateWidget"),
            Some("crate::widget::create_widget")
        );
        assert_eq!(policy.replacement_trampoline("GetWidget"), None);
    }

    #[test]
    fn test_silent_codes() {
        let policy: Policy = POLICY.parse().unwrap();
        assert_eq!(policy.silent_codes("GetWidget"), ["NotFound".to_string()]);
        assert!(policy.silent_codes("DestroyWidget").is_empty());
    }

    #[test]
    fn test_namespace_override() {
        let policy: Policy = POLICY.parse().unwrap();
        let policy = policy.with_namespace("crate::other");
        assert_eq!(policy.namespace(), Some("crate::other"));
    }

    #[test]
    fn test_namespace_is_optional_at_parse_time() {
        let src = r#"
[output]
trait_name = "Api"
result_type = "Code"
resolver = "Resolve"
"#;
        let policy: Policy = src.parse().unwrap();
        assert_eq!(policy.namespace(), None);
    }

    #[test]
    fn test_missing_output_is_parse_error() {
        let err = Policy::from_str("extensions = []").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_extension() {
        let src = r#"
extensions = ["X_color", "X_color"]

[output]
trait_name = "Api"
result_type = "Code"
resolver = "Resolve"
"#;
        let err = Policy::from_str(src).unwrap_err();
        assert_eq!(err.to_string(), "duplicate extension 'X_color'");
    }

    #[test]
    fn test_invalid_namespace() {
        let src = r#"
[output]
namespace = "crate::"
trait_name = "Api"
result_type = "Code"
resolver = "Resolve"
"#;
        let err = Policy::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_same_output_files_rejected() {
        let src = r#"
[output]
trait_name = "Api"
result_type = "Code"
resolver = "Resolve"
interface_file = "gen.rs"
dispatch_file = "gen.rs"
"#;
        let err = Policy::from_str(src).unwrap_err();
        assert!(err.to_string().contains("both 'gen.rs'"));
    }

    #[test]
    fn test_bad_signature() {
        let src = r#"
[output]
trait_name = "Api"
result_type = "Code"
resolver = "Resolve"

[very_special.CreateWidget]
trampoline = "crate::create_widget"
signature = "create_widget(&self)"
"#;
        let err = Policy::from_str(src).unwrap_err();
        assert!(err.to_string().contains("must start with 'fn '"));
    }
}
