//! Lint for overrides that do not say what replaces the generated code.

use dispatchgen_manifest::{Policy, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors on special entries without a replacement trampoline and on
/// very-special entries without a trampoline or a signature.
pub struct MissingOverrideLint;

impl Lint for MissingOverrideLint {
    fn name(&self) -> &'static str {
        "missing-override"
    }

    fn description(&self) -> &'static str {
        "Require hand-written replacements for special and very-special commands"
    }

    fn check(&self, _schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        let mut missing = |table: &str, name: &str, what: &str| {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("{} command '{}' does not declare its {}", table, name, what),
                )
                .with_code(self.name())
                .at(format!("policy.{}.{}", table, name)),
            );
        };

        for (name, entry) in &policy.special {
            if entry.trampoline.is_none() {
                missing("special", name, "trampoline");
            }
        }

        for (name, entry) in &policy.very_special {
            if entry.trampoline.is_none() {
                missing("very_special", name, "trampoline");
            }
            if entry.signature.is_none() {
                missing("very_special", name, "signature");
            }
        }
    }
}
