//! Explain operation - describe the pipeline and what it would emit.

use std::path::Path;

use dispatchgen_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use dispatchgen_ir::Trampoline;
use dispatchgen_manifest::{Policy, Schema};

use crate::reports::{EntryPoint, ExplainReport, LintInfo, PhaseInfo};

/// Execute the explain operation.
///
/// The resolution plan is only computed when the inputs pass validation.
pub fn explain(schema: Schema, policy: Policy, schema_path: &Path) -> ExplainReport {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let resolver = policy.output.resolver.clone();
    let entry_points = match pipeline.run(schema, policy).and_then(|mut ctx| ctx.take_ir()) {
        Ok(ir) => Some(ir.commands.iter().map(entry_point).collect()),
        Err(e) => {
            tracing::debug!(error = %e, "no resolution plan");
            None
        }
    };

    ExplainReport {
        schema_path: schema_path.to_path_buf(),
        resolver,
        phases,
        lints,
        entry_points,
    }
}

fn entry_point(command: &dispatchgen_ir::CommandIR) -> EntryPoint {
    let provided_by = match &command.trampoline {
        Trampoline::Generated => "generated".to_string(),
        Trampoline::HandWritten { path } => format!("hand-written ({})", path),
        Trampoline::HandWrittenWithSignature { path, .. } => {
            format!("hand-written with signature ({})", path)
        }
    };

    EntryPoint {
        name: command.name.clone(),
        provided_by,
        requires: command.requires.clone(),
    }
}

#[cfg(test)]
mod tests {
    use dispatchgen_codegen::testing;

    use super::*;

    #[test]
    fn test_explain_lists_phases_and_lints() {
        let report = explain(
            testing::widget_schema(),
            testing::widget_policy(),
            Path::new("schema.toml"),
        );

        let phases: Vec<_> = report.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(phases, ["validate", "lower"]);
        assert!(report.lints.iter().any(|l| l.name == "missing-override"));
    }

    #[test]
    fn test_explain_plans_surviving_commands() {
        let report = explain(
            testing::widget_schema(),
            testing::widget_policy(),
            Path::new("schema.toml"),
        );

        let entries = report.entry_points.unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["GetWidget", "ResetWidgets", "GetWidgetColor"]);
        assert_eq!(entries[2].requires, ["X_color"]);
        assert_eq!(entries[0].provided_by, "generated");
    }

    #[test]
    fn test_explain_without_plan_on_errors() {
        let policy = testing::widget_policy_with("[special.Missing]\ntrampoline = \"x\"", false);
        let report = explain(testing::widget_schema(), policy, Path::new("schema.toml"));

        assert!(report.entry_points.is_none());
    }
}
