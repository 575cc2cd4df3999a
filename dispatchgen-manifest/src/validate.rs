//! Validation context and utilities for schema and policy parsing.

use std::{collections::HashMap, ops::Range, sync::Arc};

use dispatchgen_core::{is_rust_keyword, to_snake_case};
use miette::SourceSpan;
use toml::Spanned;

use crate::{Result, error::SourceContext};

/// Names the generated code claims for itself.
///
/// Every trampoline takes the dispatch handle as its first parameter.
pub(crate) const RESERVED_PARAM_NAMES: &[&str] = &["api"];

/// Keywords allowed as the first segment of a module path.
const PATH_ROOTS: &[&str] = &["crate", "self", "super"];

/// Parsing and validation context that carries source information.
///
/// Carries the source content, filename and the current path through the
/// document so nested validation can produce precise messages.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "widget.toml");
/// ctx.validate_name("GetWidget", "command", None)?;
///
/// let nested = ctx.push("GetWidget");
/// nested.validate_name("id", "parameter", None)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["GetWidget", "id"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'GetWidget'" or just "command" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a plain identifier.
    ///
    /// Uses `span` when the caller knows it, otherwise searches the source.
    pub fn validate_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span.or_else(|| self.find_span(name)),
            ));
        }
        Ok(())
    }

    /// Validate a name that is used verbatim as a Rust type.
    pub fn validate_type_name(&self, name: &str, kind: &str) -> Result<()> {
        self.validate_name(name, kind, None)?;
        if is_rust_keyword(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                "name is a Rust keyword",
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate a spanned name.
    pub fn validate_spanned(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        self.validate_name(name.get_ref(), kind, Some(to_source_span(name.span())))
    }

    /// Validate a `::`-separated module path such as `crate::api`.
    pub fn validate_path(&self, path: &str, kind: &str) -> Result<()> {
        let span = self.find_span(path);
        if path.is_empty() {
            return Err(self.source.invalid_identifier_error(
                path,
                self.context_for(kind),
                "path cannot be empty",
                span,
            ));
        }
        for (i, segment) in path.split("::").enumerate() {
            let reason = validate_identifier(segment).or_else(|| {
                let leading = i == 0 && PATH_ROOTS.contains(&segment);
                let chained_super = segment == "super" && path.starts_with("super::");
                (is_rust_keyword(segment) && !leading && !chained_super)
                    .then_some("path segment is a Rust keyword")
            });
            if let Some(reason) = reason {
                return Err(self.source.invalid_identifier_error(
                    path,
                    self.context_for(kind),
                    reason,
                    span,
                ));
            }
        }
        Ok(())
    }

    /// Reject names the generated code uses for itself.
    pub fn check_reserved(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        // Parameters are emitted in snake_case, so `Api` would still clash
        if RESERVED_PARAM_NAMES.contains(&to_snake_case(name.get_ref()).as_str()) {
            return Err(self.source.reserved_name_error(
                name.get_ref(),
                self.context_for(kind),
                Some(to_source_span(name.span())),
            ));
        }
        Ok(())
    }

    /// Fail on the first name declared twice, labelling both declarations.
    pub fn check_unique<'n>(
        &self,
        names: impl IntoIterator<Item = &'n Spanned<String>>,
        kind: &str,
    ) -> Result<()> {
        let mut seen: HashMap<&str, Range<usize>> = HashMap::new();
        for name in names {
            if let Some(first) = seen.get(name.get_ref().as_str()) {
                return Err(self.source.duplicate_error(
                    name.get_ref(),
                    self.context_for(kind),
                    to_source_span(first.clone()),
                    to_source_span(name.span()),
                ));
            }
            seen.insert(name.get_ref(), name.span());
        }
        Ok(())
    }
}

/// Convert a byte range into a miette span.
pub(crate) fn to_source_span(range: Range<usize>) -> SourceSpan {
    SourceSpan::from((range.start, range.end - range.start))
}

/// Find the span of a name in the TOML source.
///
/// Searches for a table header segment (`[special.Name]`), a quoted string
/// value (`"Name"`), or a bare key at the start of a line (`Name = ...`).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    // Table header segments, skipping the leading dot
    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Quoted values, skipping the opening quote
    for pattern in [format!("\"{}\"", name), format!("'{}'", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Bare keys at line start
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(name) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, name.len())));
            }
        }
        offset += line.len();
    }

    None
}

/// Validate that a name is a plain identifier.
///
/// Returns None if valid, Some(reason) if invalid. Keywords are accepted:
/// emitters escape them when they become Rust identifiers.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    // `_` and `__` snake_case to nothing
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Some("name must contain a letter or number");
    }

    None
}
