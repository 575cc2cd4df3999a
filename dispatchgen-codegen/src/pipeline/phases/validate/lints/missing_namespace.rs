//! Lint requiring a namespace for the generated artifacts.

use dispatchgen_manifest::{Policy, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

pub struct MissingNamespaceLint;

impl Lint for MissingNamespaceLint {
    fn name(&self) -> &'static str {
        "missing-namespace"
    }

    fn description(&self) -> &'static str {
        "Require a namespace, from the policy or the command line"
    }

    fn check(&self, _schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        if policy.namespace().is_none() {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    "no namespace configured; set output.namespace or pass --namespace",
                )
                .with_code(self.name())
                .at("policy.output.namespace"),
            );
        }
    }
}
