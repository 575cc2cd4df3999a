//! Lint for silenced codes on commands that return nothing.

use dispatchgen_manifest::{Policy, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

pub struct SilentWithoutResultLint;

impl Lint for SilentWithoutResultLint {
    fn name(&self) -> &'static str {
        "silent-without-result"
    }

    fn description(&self) -> &'static str {
        "Detect silent entries on commands that return no result code"
    }

    fn check(&self, schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        for name in policy.silent.keys() {
            let Some(command) = schema.command(name) else {
                continue;
            };
            if !command.returns {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "'{}' returns no result code; its silent entry has no effect",
                            name
                        ),
                    )
                    .with_code(self.name())
                    .at(format!("policy.silent.{}", name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_silenced_void_command() {
        let policy = testing::policy(&testing::WIDGET_POLICY.replace(
            "GetWidget = [\"NotFound\"]",
            "ResetWidgets = [\"Busy\"]",
        ));
        let mut diagnostics = Vec::new();
        SilentWithoutResultLint.check(&testing::widget_schema(), &policy, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("policy.silent.ResetWidgets")
        );
    }

    #[test]
    fn test_silenced_returning_command() {
        let mut diagnostics = Vec::new();
        SilentWithoutResultLint.check(
            &testing::widget_schema(),
            &testing::widget_policy(),
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
    }
}
