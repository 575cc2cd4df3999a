//! Pipeline orchestrator.

use dispatchgen_manifest::{Policy, Schema};
use eyre::Result;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs built-in phases (validate, lower) followed by any user phases,
/// calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(schema, policy)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase (e.g., to add lints).
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a schema and policy.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs the lints, fails on errors
    /// 2. LowerPhase - builds the dispatch IR
    /// 3. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, schema: Schema, policy: Policy) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema, policy);

        self.run_phase(&self.validate, &mut ctx)?;
        self.run_phase(&LowerPhase, &mut ctx)?;
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Names and descriptions of every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        [self.validate.info(), LowerPhase.info()]
            .into_iter()
            .chain(self.phases.iter().map(|p| p.info()))
            .collect()
    }

    /// Run the lints only and return every diagnostic, errors included.
    pub fn check(&self, schema: Schema, policy: Policy) -> CompilationContext {
        let mut ctx = CompilationContext::new(schema, policy);
        self.validate.collect(&mut ctx);
        ctx
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
