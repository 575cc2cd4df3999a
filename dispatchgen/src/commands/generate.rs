use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::InputArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (schema, policy) = self.inputs.load();
        let report = ops::generate(schema, policy, &self.output, self.dry_run)?;

        report.render(&mut TerminalOutput::new());

        if report.is_rejected() {
            std::process::exit(1);
        }
        Ok(())
    }
}
