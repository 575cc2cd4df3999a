//! Check operation - schema and policy validation.

use std::path::Path;

use dispatchgen_codegen::pipeline::Pipeline;
use dispatchgen_manifest::{Policy, Schema};

use crate::reports::{CheckReport, CheckSummary};

/// Execute the check operation.
///
/// Runs every lint and keeps all diagnostics, errors included.
pub fn check(schema: Schema, policy: Policy, schema_path: &Path, policy_path: &Path) -> CheckReport {
    let summary = CheckSummary {
        core_commands: schema.core_commands().count(),
        extension_commands: schema.extension_commands().count(),
        extensions: policy.extensions().count(),
        excluded: policy.excluded().count(),
    };

    let ctx = Pipeline::new().check(schema, policy);

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        policy_path: policy_path.to_path_buf(),
        diagnostics: ctx.diagnostics,
        summary,
    }
}
