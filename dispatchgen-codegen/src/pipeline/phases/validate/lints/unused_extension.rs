//! Lint for included extensions that gate nothing.

use dispatchgen_manifest::{Policy, Schema};

use super::{super::Lint, survives};
use crate::pipeline::Diagnostic;

/// Warns when the policy includes an extension that no generated command
/// requires. The flag is still emitted and still registrable.
pub struct UnusedExtensionLint;

impl Lint for UnusedExtensionLint {
    fn name(&self) -> &'static str {
        "unused-extension"
    }

    fn description(&self) -> &'static str {
        "Detect included extensions that gate no command"
    }

    fn check(&self, schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        for extension in policy.extensions() {
            let used = schema
                .extension_commands()
                .filter(|c| survives(policy, c))
                .any(|c| c.requires().any(|r| r == extension));
            if !used {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("extension '{}' gates no command", extension),
                    )
                    .with_code(self.name())
                    .at("policy.extensions"),
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
    fn test_used_extension() {
        let mut diagnostics = Vec::new();
        UnusedExtensionLint.check(
            &testing::widget_schema(),
            &testing::widget_policy(),
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unused_extension() {
        let policy = testing::policy(&testing::WIDGET_POLICY.replace(
            "extensions = [\"X_color\"]",
            "extensions = [\"X_color\", \"X_sound\"]",
        ));
        let mut diagnostics = Vec::new();
        UnusedExtensionLint.check(&testing::widget_schema(), &policy, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "extension 'X_sound' gates no command");
    }

    #[test]
    fn test_extension_whose_commands_are_excluded() {
        let policy = testing::widget_policy_with("excluded = [\"GetWidgetColor\"]", true);
        let mut diagnostics = Vec::new();
        UnusedExtensionLint.check(&testing::widget_schema(), &policy, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
    }
}
