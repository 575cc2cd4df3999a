//! Lower phase - turns schema and policy into the dispatch IR.
//!
//! Everything policy-dependent is resolved here so the emitters only walk
//! the IR: which commands survive, how each trampoline is provided, and
//! which result codes are silenced.

use dispatchgen_ir::{CommandIR, DispatchIR, DispatchMeta, Extension, ParamIR, Trampoline};
use dispatchgen_manifest::{Command, Handling, Policy, Schema};
use eyre::{Result, eyre};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that lowers the inputs into [`DispatchIR`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform schema and policy into the dispatch IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower(&ctx.schema, &ctx.policy)?);
        Ok(())
    }
}

/// Lower a schema under a policy.
pub fn lower(schema: &Schema, policy: &Policy) -> Result<DispatchIR> {
    let meta = lower_meta(policy)?;

    let mut commands = Vec::new();
    for command in schema.core_commands().chain(schema.extension_commands()) {
        if let Some(lowered) = lower_command(command, policy)? {
            commands.push(lowered);
        }
    }

    Ok(DispatchIR {
        meta,
        extensions: policy
            .extensions()
            .map(|name| Extension { name: name.to_string() })
            .collect(),
        commands,
    })
}

fn lower_meta(policy: &Policy) -> Result<DispatchMeta> {
    let output = &policy.output;
    let namespace = policy
        .namespace()
        .ok_or_else(|| eyre!("no namespace configured; set output.namespace or pass --namespace"))?;

    Ok(DispatchMeta {
        namespace: namespace.to_string(),
        trait_name: output.trait_name.clone(),
        result_type: output.result_type.clone(),
        resolver: output.resolver.clone(),
        interface_file: output.interface_file.clone(),
        dispatch_file: output.dispatch_file.clone(),
    })
}

/// Lower one command, or `None` if it does not survive the policy.
fn lower_command(command: &Command, policy: &Policy) -> Result<Option<CommandIR>> {
    let name = command.name();

    // The resolver is always emitted by the generator itself
    if name == policy.output.resolver {
        tracing::debug!(command = name, "skipping command named like the resolver");
        return Ok(None);
    }

    let trampoline = match policy.handling(name) {
        Handling::Excluded => {
            tracing::debug!(command = name, "skipping excluded command");
            return Ok(None);
        }
        Handling::Generated => Trampoline::Generated,
        Handling::Special => Trampoline::HandWritten {
            path: replacement(policy, name)?,
        },
        Handling::VerySpecial => {
            let signature = policy
                .very_special
                .get(name)
                .and_then(|entry| entry.signature.clone())
                .ok_or_else(|| eyre!("very-special command '{}' has no signature", name))?;
            Trampoline::HandWrittenWithSignature {
                path: replacement(policy, name)?,
                signature,
            }
        }
    };

    if let Some(ext) = command.requires().find(|ext| !policy.includes_extension(ext)) {
        tracing::debug!(command = name, extension = ext, "skipping command of unsupported extension");
        return Ok(None);
    }

    let silent = if command.returns {
        policy.silent_codes(name).to_vec()
    } else {
        Vec::new()
    };

    Ok(Some(CommandIR {
        name: name.to_string(),
        params: command
            .params
            .iter()
            .map(|p| ParamIR {
                name: p.name().to_string(),
                ty: p.ty.clone(),
            })
            .collect(),
        returns: command.returns,
        requires: command.requires().map(str::to_string).collect(),
        trampoline,
        silent,
    }))
}

fn replacement(policy: &Policy, name: &str) -> Result<String> {
    policy
        .replacement_trampoline(name)
        .map(str::to_string)
        .ok_or_else(|| eyre!("'{}' is hand-written but declares no trampoline", name))
}
