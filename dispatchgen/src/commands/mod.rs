mod check;
mod completions;
mod explain;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use dispatchgen_manifest::{Policy, Schema};
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;

use crate::ops;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dispatchgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Schema and policy locations shared by every pipeline command.
#[derive(Args)]
pub struct InputArgs {
    /// Path to the API schema
    #[arg(short, long, default_value = "schema.toml")]
    pub schema: PathBuf,

    /// Path to the policy table
    #[arg(short, long, default_value = "policy.toml")]
    pub policy: PathBuf,

    /// Namespace the generated files import from (overrides output.namespace)
    #[arg(long)]
    pub namespace: Option<String>,
}

impl InputArgs {
    /// Load both inputs, exiting with a rendered diagnostic on failure.
    pub fn load(&self) -> (Schema, Policy) {
        ops::load(&self.schema, &self.policy, self.namespace.as_deref()).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "dispatchgen")]
#[command(version)]
#[command(about = "Generate a dispatch layer from an API schema and a policy table")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the interface and dispatch files
    Generate(GenerateCommand),

    /// Validate the schema and policy without generating code
    Check(CheckCommand),

    /// Show the pipeline phases and lints
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::parse_from(["dispatchgen", "generate"]);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.inputs.schema, PathBuf::from("schema.toml"));
        assert_eq!(cmd.inputs.policy, PathBuf::from("policy.toml"));
        assert_eq!(cmd.output, PathBuf::from("."));
        assert!(!cmd.dry_run);
        assert!(cmd.inputs.namespace.is_none());
    }

    #[test]
    fn test_namespace_flag() {
        let cli = Cli::parse_from([
            "dispatchgen",
            "check",
            "--schema",
            "api.toml",
            "--namespace",
            "crate::api",
        ]);
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(cmd.inputs.schema, PathBuf::from("api.toml"));
        assert_eq!(cmd.inputs.namespace.as_deref(), Some("crate::api"));
    }
}
