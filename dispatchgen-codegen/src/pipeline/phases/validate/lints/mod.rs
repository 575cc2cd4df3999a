//! Built-in lints.

mod identifier_collision;
mod missing_namespace;
mod missing_override;
mod overlapping_policy;
mod silent_without_result;
mod unknown_policy_command;
mod unsupported_extension;
mod unused_extension;

use dispatchgen_manifest::{Command, Handling, Policy};
pub use identifier_collision::IdentifierCollisionLint;
pub use missing_namespace::MissingNamespaceLint;
pub use missing_override::MissingOverrideLint;
pub use overlapping_policy::OverlappingPolicyLint;
pub use silent_without_result::SilentWithoutResultLint;
pub use unknown_policy_command::UnknownPolicyCommandLint;
pub use unsupported_extension::UnsupportedExtensionLint;
pub use unused_extension::UnusedExtensionLint;

/// Whether a command makes it into the generated layer.
pub(crate) fn survives(policy: &Policy, command: &Command) -> bool {
    command.name() != policy.output.resolver
        && policy.handling(command.name()) != Handling::Excluded
        && command.requires().all(|ext| policy.includes_extension(ext))
}
