//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Name the resolver answers for itself.
    pub resolver: String,
    /// Pipeline phases.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    /// Resolvable commands; `None` when the inputs fail validation.
    pub entry_points: Option<Vec<EntryPoint>>,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    /// Phase name.
    pub name: String,
    /// Phase description.
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    /// Lint name.
    pub name: String,
    /// Lint description.
    pub description: String,
}

/// A command the generated resolver will answer.
#[derive(Debug)]
pub struct EntryPoint {
    pub name: String,
    /// `generated` or a hand-written trampoline path.
    pub provided_by: String,
    /// Extensions gating the command.
    pub requires: Vec<String>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("dispatchgen Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.schema_path.display().to_string());
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section("Resolution Plan");
        let Some(entries) = &self.entry_points else {
            out.preformatted("  unavailable: the inputs fail validation (see `dispatchgen check`)");
            return;
        };

        out.list_item(&format!("{} -> resolver", self.resolver));
        for entry in entries {
            let gate = if entry.requires.is_empty() {
                String::new()
            } else {
                format!(" [requires {}]", entry.requires.join(" + "))
            };
            out.list_item(&format!("{} -> {}{}", entry.name, entry.provided_by, gate));
        }
    }
}
