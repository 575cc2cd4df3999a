use std::{env, path::PathBuf};

use dispatchgen_codegen::pipeline::{Pipeline, Severity};
use dispatchgen_codegen_rust::{Generator, LanguageCodegen};
use dispatchgen_manifest::{Policy, Schema};
use eyre::{Result, eyre};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=widget.toml");
    println!("cargo:rerun-if-changed=policy.toml");

    let schema = Schema::from_file("widget.toml").map_err(|e| eyre!("{}", e))?;
    let policy = Policy::from_file("policy.toml").map_err(|e| eyre!("{}", e))?;

    let ctx = Pipeline::new().run(schema, policy)?;
    for diag in &ctx.diagnostics {
        if matches!(diag.severity, Severity::Warning) {
            println!("cargo:warning={}", diag);
        }
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    Generator::from_context(ctx)?.generate(&out_dir)?;
    Ok(())
}
