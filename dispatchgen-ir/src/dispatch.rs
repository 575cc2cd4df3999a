//! Dispatch-layer intermediate representation.
//!
//! ```text
//! schema.toml + policy.toml -> (validate, lower) -> DispatchIR -> emitters
//! ```
//!
//! Everything the emitters need has been decided here: excluded commands and
//! commands gated by unsupported extensions are gone, and every command knows
//! how its trampoline is provided.

use serde::Serialize;

/// Lowered dispatch layer, ready for emission.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchIR {
    pub meta: DispatchMeta,
    /// Included extensions, in registration order.
    pub extensions: Vec<Extension>,
    /// Surviving commands: core commands first, then extension commands,
    /// each group in declaration order.
    pub commands: Vec<CommandIR>,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchMeta {
    /// Module path glob-imported by both artifacts.
    pub namespace: String,
    pub trait_name: String,
    pub result_type: String,
    /// Name under which the resolver resolves itself.
    pub resolver: String,
    pub interface_file: String,
    pub dispatch_file: String,
}

/// An extension that can be enabled at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension {
    pub name: String,
}

/// A command that appears in the generated layer.
#[derive(Debug, Clone, Serialize)]
pub struct CommandIR {
    pub name: String,
    pub params: Vec<ParamIR>,
    pub returns: bool,
    /// Extensions that must all be active; empty for core commands.
    pub requires: Vec<String>,
    pub trampoline: Trampoline,
    /// Result codes logged at reduced severity.
    pub silent: Vec<String>,
}

impl CommandIR {
    pub fn is_extension_command(&self) -> bool {
        !self.requires.is_empty()
    }

    /// Whether the trait method is generated (false for hand-written signatures).
    pub fn has_generated_method(&self) -> bool {
        !matches!(self.trampoline, Trampoline::HandWrittenWithSignature { .. })
    }

    /// Whether the trampoline is generated.
    pub fn has_generated_trampoline(&self) -> bool {
        matches!(self.trampoline, Trampoline::Generated)
    }
}

/// A positional parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamIR {
    pub name: String,
    /// Verbatim Rust type
    pub ty: String,
}

/// How a command's trampoline is provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trampoline {
    /// Emitted by the generator.
    Generated,
    /// Hand-written at `path`; the trait method is still generated.
    HandWritten { path: String },
    /// Hand-written at `path`, with a hand-written trait method `signature`.
    HandWrittenWithSignature { path: String, signature: String },
}

impl Trampoline {
    /// Path of a hand-written trampoline.
    pub fn hand_written_path(&self) -> Option<&str> {
        match self {
            Trampoline::Generated => None,
            Trampoline::HandWritten { path } | Trampoline::HandWrittenWithSignature { path, .. } => {
                Some(path.as_str())
            }
        }
    }
}

impl DispatchIR {
    pub fn core_commands(&self) -> impl Iterator<Item = &CommandIR> {
        self.commands.iter().filter(|c| !c.is_extension_command())
    }

    pub fn extension_commands(&self) -> impl Iterator<Item = &CommandIR> {
        self.commands.iter().filter(|c| c.is_extension_command())
    }

    /// Commands whose trait method is generated.
    pub fn interface_methods(&self) -> impl Iterator<Item = &CommandIR> {
        self.commands.iter().filter(|c| c.has_generated_method())
    }

    /// Hand-written trait method signatures, in command order.
    pub fn hand_written_signatures(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match &c.trampoline {
            Trampoline::HandWrittenWithSignature { signature, .. } => Some(signature.as_str()),
            _ => None,
        })
    }

    /// Commands whose trampoline is generated.
    pub fn generated_trampolines(&self) -> impl Iterator<Item = &CommandIR> {
        self.commands.iter().filter(|c| c.has_generated_trampoline())
    }

    /// Number of names the resolver answers, itself included.
    pub fn resolvable_count(&self) -> usize {
        self.commands.len() + 1
    }

    pub fn command(&self, name: &str) -> Option<&CommandIR> {
        self.commands.iter().find(|c| c.name == name)
    }
}
