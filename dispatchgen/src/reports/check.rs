//! Check command report data structures.

use std::path::PathBuf;

use dispatchgen_codegen::pipeline::Diagnostic;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from schema and policy validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub schema_path: PathBuf,
    pub policy_path: PathBuf,
    /// Every diagnostic the lints produced, in lint order.
    pub diagnostics: Vec<Diagnostic>,
    pub summary: CheckSummary,
}

/// Counts describing the checked inputs.
#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub core_commands: usize,
    pub extension_commands: usize,
    /// Extensions the policy includes.
    pub extensions: usize,
    /// Names the policy excludes.
    pub excluded: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(diag);
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!(
            "✓ {} and {} are valid",
            self.schema_path.display(),
            self.policy_path.display()
        ));
        out.newline();

        let s = &self.summary;
        out.key_value_indented(
            "Commands",
            &format!(
                "{}, {}",
                plural(s.core_commands, "core command"),
                plural(s.extension_commands, "extension command")
            ),
        );
        out.key_value_indented("Extensions", &format!("{} included", s.extensions));
        out.key_value_indented("Excluded", &s.excluded.to_string());
    }
}
