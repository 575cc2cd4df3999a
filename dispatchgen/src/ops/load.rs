//! Load operation - read the schema and policy from disk.

use std::path::Path;

use dispatchgen_manifest::{Policy, Result, Schema};

/// Parse both inputs, applying a command-line namespace over the policy's.
pub fn load(
    schema_path: &Path,
    policy_path: &Path,
    namespace: Option<&str>,
) -> Result<(Schema, Policy)> {
    let schema = Schema::from_file(schema_path)?;
    let mut policy = Policy::from_file(policy_path)?;

    if let Some(namespace) = namespace {
        tracing::debug!(namespace, "namespace overridden on the command line");
        policy = policy.with_namespace(namespace);
    }

    Ok((schema, policy))
}
