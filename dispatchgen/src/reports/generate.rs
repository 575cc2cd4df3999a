//! Generate command report data structures.

use std::path::PathBuf;

use dispatchgen_codegen::pipeline::{Diagnostic, Severity};
use dispatchgen_core::{GenerateResult, PreviewFile};

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub diagnostics: Vec<Diagnostic>,
    pub outcome: GenerateOutcome,
}

#[derive(Debug)]
pub enum GenerateOutcome {
    /// Validation failed; nothing was written.
    Rejected,
    /// Dry run: rendered files, not written.
    Preview(Vec<PreviewFile>),
    /// Files written to `output_dir`.
    Written {
        output_dir: PathBuf,
        result: GenerateResult,
    },
}

impl GenerateReport {
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, GenerateOutcome::Rejected)
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        // Info diagnostics are left to `check`.
        for diag in &self.diagnostics {
            if !matches!(diag.severity, Severity::Info) {
                out.diagnostic(diag);
            }
        }

        match &self.outcome {
            GenerateOutcome::Rejected => {
                let errors = self
                    .diagnostics
                    .iter()
                    .filter(|d| d.severity.is_error())
                    .count();
                out.newline();
                out.preformatted(&format!(
                    "Generation aborted: {} error(s), no files written",
                    errors
                ));
            }
            GenerateOutcome::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            GenerateOutcome::Written { output_dir, result } => {
                out.section(&format!("Generated in {}", output_dir.display()));
                for path in &result.written {
                    out.added_item(path);
                }
                out.newline();
                out.key_value_indented("Trampolines", &result.trampolines.to_string());
                out.key_value_indented("Resolvable names", &result.resolvable.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_summary() {
        let report = GenerateReport {
            diagnostics: vec![Diagnostic::info("validate", "left out")],
            outcome: GenerateOutcome::Written {
                output_dir: PathBuf::from("out"),
                result: GenerateResult {
                    written: vec!["interface.rs".into(), "dispatch.rs".into()],
                    trampolines: 3,
                    resolvable: 4,
                },
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "Generated in out:");
        assert_eq!(out.lines[1], "  + interface.rs");
        assert!(out.text().contains("Resolvable names: 4"));
        assert!(!out.text().contains("left out"));
    }

    #[test]
    fn test_preview_prints_each_file() {
        let report = GenerateReport {
            diagnostics: vec![],
            outcome: GenerateOutcome::Preview(vec![PreviewFile {
                path: "interface.rs".into(),
                content: "pub trait Api {}".into(),
            }]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── interface.rs ──",
                "pub trait Api {}",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_rejected_counts_errors() {
        let report = GenerateReport {
            diagnostics: vec![Diagnostic::error("validate", "bad")],
            outcome: GenerateOutcome::Rejected,
        };
        assert!(report.is_rejected());

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert!(out.text().ends_with("Generation aborted: 1 error(s), no files written"));
    }
}
