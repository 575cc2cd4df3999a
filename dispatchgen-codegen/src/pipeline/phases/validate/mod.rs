//! Validate phase - cross-checks the policy against the schema.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    IdentifierCollisionLint, MissingNamespaceLint, MissingOverrideLint, OverlappingPolicyLint,
    SilentWithoutResultLint, UnknownPolicyCommandLint, UnsupportedExtensionLint,
    UnusedExtensionLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the inputs using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingNamespaceLint),
                Box::new(UnknownPolicyCommandLint),
                Box::new(OverlappingPolicyLint),
                Box::new(MissingOverrideLint),
                Box::new(IdentifierCollisionLint),
                Box::new(UnsupportedExtensionLint),
                Box::new(UnusedExtensionLint),
                Box::new(SilentWithoutResultLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint and record its diagnostics without failing.
    pub fn collect(&self, ctx: &mut CompilationContext) {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.schema, &ctx.policy, &mut ctx.diagnostics);
            tracing::trace!(
                lint = lint.name(),
                found = ctx.diagnostics.len() - before,
                "lint finished"
            );
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Cross-check the policy against the schema and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.collect(ctx);

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
