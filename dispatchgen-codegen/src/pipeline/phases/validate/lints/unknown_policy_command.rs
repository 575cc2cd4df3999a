//! Lint for policy entries that name no command.

use dispatchgen_manifest::{Policy, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors on silent, special and very-special entries naming unknown
/// commands; warns on unknown exclusions, which are harmless.
pub struct UnknownPolicyCommandLint;

impl Lint for UnknownPolicyCommandLint {
    fn name(&self) -> &'static str {
        "unknown-policy-command"
    }

    fn description(&self) -> &'static str {
        "Detect policy entries that name no command in the schema"
    }

    fn check(&self, schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        let tables = [
            ("silent", policy.silent.keys().collect::<Vec<_>>()),
            ("special", policy.special.keys().collect()),
            ("very_special", policy.very_special.keys().collect()),
        ];

        for (table, names) in tables {
            for name in names {
                if !schema.has_command(name) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("{} entry '{}' names no command in the schema", table, name),
                        )
                        .with_code(self.name())
                        .at(format!("policy.{}.{}", table, name)),
                    );
                }
            }
        }

        for name in policy.excluded() {
            if !schema.has_command(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("excluded command '{}' is not in the schema", name),
                    )
                    .with_code(self.name())
                    .at("policy.excluded"),
                );
            }
        }
    }
}
