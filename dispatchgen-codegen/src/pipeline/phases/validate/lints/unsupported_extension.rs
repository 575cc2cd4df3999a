//! Lint reporting extension commands the policy leaves out.

use dispatchgen_manifest::{Policy, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Reports, as info, each extension command gated on an extension the
/// policy does not include. Such commands are dropped from the layer.
pub struct UnsupportedExtensionLint;

impl Lint for UnsupportedExtensionLint {
    fn name(&self) -> &'static str {
        "unsupported-extension"
    }

    fn description(&self) -> &'static str {
        "Report extension commands dropped because their extension is not included"
    }

    fn check(&self, schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        for command in schema.extension_commands() {
            if policy.is_excluded(command.name()) {
                continue;
            }
            let missing: Vec<&str> = command
                .requires()
                .filter(|ext| !policy.includes_extension(ext))
                .collect();
            if missing.is_empty() {
                continue;
            }
            diagnostics.push(
                Diagnostic::info(
                    "validate",
                    format!(
                        "'{}' requires unsupported extension {}; it is left out",
                        command.name(),
                        missing
                            .iter()
                            .map(|ext| format!("'{}'", ext))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                )
                .with_code(self.name())
                .at(format!("schema.commands.{}", command.name())),
            );
        }
    }
}
