//! Generate operation - run the pipeline and emit the dispatch layer.

use std::path::Path;

use dispatchgen_codegen::pipeline::Pipeline;
use dispatchgen_codegen_rust::Generator;
use dispatchgen_core::LanguageCodegen;
use dispatchgen_manifest::{Policy, Schema};
use eyre::{Context, Result};

use crate::reports::{GenerateOutcome, GenerateReport};

/// Execute the generate operation.
///
/// Validation errors produce a rejected report and no files. Otherwise
/// both artifacts are written to `output`, or only rendered when
/// `dry_run` is set.
pub fn generate(
    schema: Schema,
    policy: Policy,
    output: &Path,
    dry_run: bool,
) -> Result<GenerateReport> {
    let pipeline = Pipeline::new();

    let checked = pipeline.check(schema.clone(), policy.clone());
    if checked.has_errors() {
        return Ok(GenerateReport {
            diagnostics: checked.diagnostics,
            outcome: GenerateOutcome::Rejected,
        });
    }

    let ctx = pipeline.run(schema, policy).wrap_err("Pipeline failed")?;
    let diagnostics = ctx.diagnostics.clone();
    let generator = Generator::from_context(ctx)?;

    let outcome = if dry_run {
        GenerateOutcome::Preview(generator.preview())
    } else {
        let result = generator
            .generate(output)
            .wrap_err("Failed to generate code")?;
        GenerateOutcome::Written {
            output_dir: output.to_path_buf(),
            result,
        }
    };

    Ok(GenerateReport {
        diagnostics,
        outcome,
    })
}
