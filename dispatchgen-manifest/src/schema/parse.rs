//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Schema;
use crate::{Error, Result, error::SourceContext, validate::ParseContext};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.toml")
    }
}

impl Schema {
    /// Parse a schema file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_schema(content, filename)
    }
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    let schema: Schema = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_schema(&schema, content, filename)?;
    Ok(schema)
}

fn validate_schema(schema: &Schema, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.check_unique(schema.commands.iter().map(|c| c.spanned_name()), "command")?;

    for command in &schema.commands {
        ctx.validate_spanned(command.spanned_name(), "command")?;

        let cmd_ctx = ctx.push(command.name());
        cmd_ctx.check_unique(command.params.iter().map(|p| p.spanned_name()), "parameter")?;
        for param in &command.params {
            cmd_ctx.validate_spanned(param.spanned_name(), "parameter")?;
            cmd_ctx.check_reserved(param.spanned_name(), "parameter")?;
            if param.ty.trim().is_empty() {
                return Err(ctx.source_context().validation_error_at(
                    format!(
                        "parameter '{}' of '{}' has an empty type",
                        param.name(),
                        command.name()
                    ),
                    crate::validate::to_source_span(param.spanned_name().span()),
                ));
            }
        }

        cmd_ctx.check_unique(command.requires.iter(), "required extension")?;
        for ext in &command.requires {
            cmd_ctx.validate_spanned(ext, "extension")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: &str = r#"
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
"#;

    #[test]
    fn test_parse_widget_schema() {
        let schema: Schema = WIDGET.parse().unwrap();
        assert_eq!(schema.commands.len(), 3);

        let core: Vec<_> = schema.core_commands().map(|c| c.name()).collect();
        assert_eq!(core, vec!["GetWidget", "ResetWidgets"]);

        let ext: Vec<_> = schema.extension_commands().map(|c| c.name()).collect();
        assert_eq!(ext, vec!["GetWidgetColor"]);
    }

    #[test]
    fn test_returns_defaults_to_true() {
        let schema: Schema = WIDGET.parse().unwrap();
        assert!(schema.command("GetWidget").unwrap().returns);
        assert!(!schema.command("ResetWidgets").unwrap().returns);
    }

    #[test]
    fn test_params_keep_order_and_types() {
        let schema: Schema = WIDGET.parse().unwrap();
        let cmd = schema.command("GetWidget").unwrap();
        let params: Vec<_> = cmd.params.iter().map(|p| (p.name(), p.ty.as_str())).collect();
        assert_eq!(params, vec![("id", "u32"), ("out", "&mut Widget")]);
    }

    #[test]
    fn test_required_extensions() {
        let schema: Schema = WIDGET.parse().unwrap();
        assert_eq!(schema.required_extensions(), vec!["X_color"]);
        assert!(schema.has_command("GetWidgetColor"));
        assert!(!schema.has_command("getwidgetcolor"));
    }

    #[test]
    fn test_empty_schema() {
        let schema: Schema = "".parse().unwrap();
        assert!(schema.commands.is_empty());
    }

    #[test]
    fn test_duplicate_command_rejected() {
        let src = r#"
[[commands]]
name = "GetWidget"

[[commands]]
name = "GetWidget"
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::Duplicate { .. }));
        assert_eq!(err.to_string(), "duplicate command 'GetWidget'");
    }

    #[test]
    fn test_duplicate_param_rejected() {
        let src = r#"
[[commands]]
name = "GetWidget"
params = [{ name = "id", type = "u32" }, { name = "id", type = "u64" }]
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(err.to_string().contains("parameter in 'GetWidget'"));
    }

    #[test]
    fn test_invalid_command_name() {
        let src = r#"
[[commands]]
name = "Get-Widget"
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_underscore_param_name_rejected() {
        let src = r#"
[[commands]]
name = "Ping"
params = [{ name = "_", type = "u32" }]
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
        assert_eq!(err.to_string(), "invalid parameter in 'Ping' name '_'");
    }

    #[test]
    fn test_underscore_command_name_rejected() {
        let src = r#"
[[commands]]
name = "__"
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_reserved_param_name() {
        let src = r#"
[[commands]]
name = "GetWidget"
params = [{ name = "api", type = "u32" }]
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::ReservedName { .. }));
    }

    #[test]
    fn test_empty_param_type() {
        let src = r#"
[[commands]]
name = "GetWidget"
params = [{ name = "id", type = " " }]
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(err.to_string().contains("empty type"));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let src = r#"
[[commands]]
name = "GetWidget"
description = "not a field"
"#;
        let err = Schema::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Schema::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
