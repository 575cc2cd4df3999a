//! Compilation context passed through pipeline phases.

use dispatchgen_ir::DispatchIR;
use dispatchgen_manifest::{Policy, Schema};
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// Carries the inputs and accumulates the IR and diagnostics.
#[derive(Debug)]
pub struct CompilationContext {
    /// The API surface being compiled.
    pub schema: Schema,
    /// The policy applied to it.
    pub policy: Policy,
    /// The lowered IR (populated by LowerPhase).
    pub ir: Option<DispatchIR>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema, policy: Policy) -> Self {
        Self {
            schema,
            policy,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context.
    ///
    /// Fails if LowerPhase has not run.
    pub fn take_ir(&mut self) -> Result<DispatchIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }
}
