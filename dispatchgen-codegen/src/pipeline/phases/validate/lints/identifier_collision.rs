//! Lint for names that map to the same generated identifier.

use dispatchgen_core::{safe_ident, to_snake_case};
use dispatchgen_manifest::{Policy, Schema};
use indexmap::IndexMap;

use super::{super::Lint, survives};
use crate::pipeline::Diagnostic;

/// Trait methods every generated interface provides.
const PROVIDED_METHODS: &[&str] = &["extensions", "register_extension"];

/// Errors when two surviving commands, two extensions, or a command and the
/// resolver share a snake_case identifier, when a command would shadow a
/// provided trait method, or when two parameters of one command would be
/// emitted under the same name.
pub struct IdentifierCollisionLint;

impl IdentifierCollisionLint {
    fn collision(&self, kind: &str, first: &str, second: &str, ident: &str) -> Diagnostic {
        Diagnostic::error(
            "validate",
            format!(
                "{} '{}' and '{}' both map to the identifier '{}'",
                kind, first, second, ident
            ),
        )
        .with_code(self.name())
    }
}

impl Lint for IdentifierCollisionLint {
    fn name(&self) -> &'static str {
        "identifier-collision"
    }

    fn description(&self) -> &'static str {
        "Detect commands or extensions whose generated identifiers collide"
    }

    fn check(&self, schema: &Schema, policy: &Policy, diagnostics: &mut Vec<Diagnostic>) {
        let resolver = &policy.output.resolver;
        let mut seen: IndexMap<String, &str> = IndexMap::new();
        seen.insert(to_snake_case(resolver), resolver);

        for command in schema.commands.iter().filter(|c| survives(policy, c)) {
            let ident = to_snake_case(command.name());
            if PROVIDED_METHODS.contains(&ident.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "command '{}' would shadow the provided trait method '{}'",
                            command.name(),
                            ident
                        ),
                    )
                    .with_code(self.name())
                    .at(format!("schema.commands.{}", command.name())),
                );
                continue;
            }
            match seen.get(&ident) {
                Some(first) => {
                    diagnostics.push(
                        self.collision("commands", first, command.name(), &ident)
                            .at(format!("schema.commands.{}", command.name())),
                    );
                }
                None => {
                    seen.insert(ident, command.name());
                }
            }

            let mut params: IndexMap<String, &str> = IndexMap::new();
            for param in &command.params {
                let ident = safe_ident(&to_snake_case(param.name()));
                match params.get(&ident) {
                    Some(first) => diagnostics.push(
                        self.collision("parameters", first, param.name(), &ident)
                            .at(format!("schema.commands.{}.params", command.name())),
                    ),
                    None => {
                        params.insert(ident, param.name());
                    }
                }
            }
        }

        let mut extensions: IndexMap<String, &str> = IndexMap::new();
        for name in policy.extensions() {
            let ident = to_snake_case(name);
            match extensions.get(&ident) {
                Some(first) => diagnostics.push(
                    self.collision("extensions", first, name, &ident)
                        .at("policy.extensions"),
                ),
                None => {
                    extensions.insert(ident, name);
                }
            }
        }
    }
}
