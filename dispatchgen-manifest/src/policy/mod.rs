//! The policy table: which commands are generated, which are hand-written,
//! which failures are expected, and where the output goes.

mod parse;

use indexmap::IndexMap;
pub use parse::parse_policy;
use serde::Deserialize;
use toml::Spanned;

/// Root of a policy file.
///
/// ```toml
/// extensions = ["X_color"]
/// excluded = ["DebugDump"]
///
/// [output]
/// namespace = "crate::widget"
/// trait_name = "WidgetApi"
/// result_type = "WidgetResult"
/// resolver = "GetProcAddr"
///
/// [special.DestroyWidget]
/// trampoline = "crate::widget::destroy_widget"
///
/// [silent]
/// GetWidget = ["NotFound"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    pub output: OutputConfig,

    /// Extensions the layer supports, in registration order
    #[serde(default)]
    extensions: Vec<Spanned<String>>,

    /// Commands removed from every artifact
    #[serde(default)]
    excluded: Vec<Spanned<String>>,

    /// Commands whose trampoline is hand-written
    #[serde(default)]
    pub special: IndexMap<String, SpecialEntry>,

    /// Commands whose trampoline and trait signature are hand-written
    #[serde(default)]
    pub very_special: IndexMap<String, VerySpecialEntry>,

    /// Result codes logged at reduced severity, per command
    #[serde(default)]
    pub silent: IndexMap<String, Vec<String>>,
}

/// The `[output]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Module path the artifacts glob-import hand-written items from
    #[serde(default)]
    pub namespace: Option<String>,

    /// Name of the generated interface trait
    pub trait_name: String,

    /// The API's result-code type
    pub result_type: String,

    /// Name of the self-referential resolver entry point
    pub resolver: String,

    #[serde(default = "default_interface_file")]
    pub interface_file: String,

    #[serde(default = "default_dispatch_file")]
    pub dispatch_file: String,
}

fn default_interface_file() -> String {
    "interface.rs".to_string()
}

fn default_dispatch_file() -> String {
    "dispatch.rs".to_string()
}

/// A command with a hand-written trampoline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialEntry {
    /// Path of the replacement trampoline
    #[serde(default)]
    pub trampoline: Option<String>,
}

/// A command with a hand-written trampoline and trait method.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerySpecialEntry {
    /// Path of the replacement trampoline
    #[serde(default)]
    pub trampoline: Option<String>,

    /// Trait method signature, emitted verbatim
    #[serde(default)]
    pub signature: Option<String>,
}

/// How the policy treats one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handling {
    /// Interface method and trampoline are both generated
    Generated,
    /// Interface method generated, trampoline hand-written
    Special,
    /// Interface method and trampoline both hand-written
    VerySpecial,
    /// Left out of every artifact
    Excluded,
}

impl Policy {
    /// Included extensions in declaration order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|e| e.get_ref().as_str())
    }

    /// Excluded command names in declaration order.
    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(|e| e.get_ref().as_str())
    }

    pub fn includes_extension(&self, name: &str) -> bool {
        self.extensions().any(|e| e == name)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded().any(|e| e == name)
    }

    /// Classify a command. Exclusion wins over the override sets.
    pub fn handling(&self, name: &str) -> Handling {
        if self.is_excluded(name) {
            Handling::Excluded
        } else if self.very_special.contains_key(name) {
            Handling::VerySpecial
        } else if self.special.contains_key(name) {
            Handling::Special
        } else {
            Handling::Generated
        }
    }

    /// The declared replacement trampoline for a special or very-special command.
    pub fn replacement_trampoline(&self, name: &str) -> Option<&str> {
        match self.handling(name) {
            Handling::Special => self.special.get(name)?.trampoline.as_deref(),
            Handling::VerySpecial => self.very_special.get(name)?.trampoline.as_deref(),
            Handling::Generated | Handling::Excluded => None,
        }
    }

    /// Result codes silenced for a command (empty if none).
    pub fn silent_codes(&self, name: &str) -> &[String] {
        self.silent.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The configured namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.output.namespace.as_deref()
    }

    /// Replace the namespace (command-line override).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.output.namespace = Some(namespace.into());
        self
    }
}
