//! Lint for commands claimed by more than one policy set.

use dispatchgen_manifest::{Policy, Schema};
use indexmap::IndexMap;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors when a command is in more than one of excluded, special and
/// very-special.
pub struct OverlappingPolicyLint;

impl Lint for OverlappingPolicyLint {
    fn name(&self) -> &'static str {
        "overlapping-policy"
    }

    fn description(&self) -> &'static str {
        "Detect commands listed in more than one of excluded, special and very_special"
    }

    fn check(&self, _schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        let mut claims: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for name in policy.excluded() {
            claims.entry(name).or_default().push("excluded");
        }
        for name in policy.special.keys() {
            claims.entry(name).or_default().push("special");
        }
        for name in policy.very_special.keys() {
            claims.entry(name).or_default().push("very_special");
        }

        for (name, sets) in claims {
            if sets.len() > 1 {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("command '{}' is listed in {}", name, sets.join(" and ")),
                    )
                    .with_code(self.name()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn run(policy: &Policy) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        OverlappingPolicyLint.check(&testing::widget_schema(), policy, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_disjoint_sets_pass() {
        let policy = testing::policy(&format!(
            "excluded = [\"ResetWidgets\"]\n{}\n[special.GetWidget]\ntrampoline = \"crate::get_widget\"",
            testing::WIDGET_POLICY
        ));
        assert!(run(&policy).is_empty());
    }

    #[test]
    fn test_excluded_and_special() {
        let policy = testing::policy(&format!(
            "excluded = [\"GetWidget\"]\n{}\n[special.GetWidget]\ntrampoline = \"crate::get_widget\"",
            testing::WIDGET_POLICY
        ));
        let diagnostics = run(&policy);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "command 'GetWidget' is listed in excluded and special"
        );
    }
}
