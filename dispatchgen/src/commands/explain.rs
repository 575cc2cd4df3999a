use clap::Args;
use eyre::Result;

use super::InputArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    #[command(flatten)]
    pub inputs: InputArgs,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let (schema, policy) = self.inputs.load();
        let report = ops::explain(schema, policy, &self.inputs.schema);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
