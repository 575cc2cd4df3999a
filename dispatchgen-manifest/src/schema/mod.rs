//! The API surface description: commands, their parameters and the
//! extensions gating them.

mod parse;

pub use parse::parse_schema;
use serde::Deserialize;
use toml::Spanned;

/// Root of a schema file.
///
/// ```toml
/// [[commands]]
/// name = "GetWidget"
/// params = [{ name = "id", type = "u32" }, { name = "out", type = "&mut Widget" }]
///
/// [[commands]]
/// name = "GetWidgetColor"
/// params = [{ name = "id", type = "u32" }, { name = "out", type = "&mut Color" }]
/// requires = ["X_color"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Commands in declaration order
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Schema {
    /// Commands gated by no extension, in declaration order.
    pub fn core_commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter(|c| !c.is_extension_command())
    }

    /// Commands gated by at least one extension, in declaration order.
    pub fn extension_commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter(|c| c.is_extension_command())
    }

    /// Look up a command by exact name.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Check if a command exists.
    pub fn has_command(&self, name: &str) -> bool {
        self.command(name).is_some()
    }

    /// Every extension named by some command's `requires`, first use first.
    pub fn required_extensions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for ext in self.commands.iter().flat_map(|c| c.requires()) {
            if !seen.contains(&ext) {
                seen.push(ext);
            }
        }
        seen
    }
}

/// One API entry point.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Command {
    name: Spanned<String>,

    /// Positional parameters
    #[serde(default)]
    pub params: Vec<Param>,

    /// Whether the command returns a result code
    #[serde(default = "default_true")]
    pub returns: bool,

    #[serde(default)]
    requires: Vec<Spanned<String>>,
}

fn default_true() -> bool {
    true
}

impl Command {
    /// The command name as declared.
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    /// The command name with its source location.
    pub fn spanned_name(&self) -> &Spanned<String> {
        &self.name
    }

    /// Extensions that must all be active for the command to resolve.
    pub fn requires(&self) -> impl Iterator<Item = &str> {
        self.requires.iter().map(|r| r.get_ref().as_str())
    }

    /// Whether the command is gated by at least one extension.
    pub fn is_extension_command(&self) -> bool {
        !self.requires.is_empty()
    }
}

/// A positional parameter with an opaque Rust type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Param {
    name: Spanned<String>,

    /// Rust type, copied verbatim into generated signatures
    #[serde(rename = "type")]
    pub ty: String,
}

impl Param {
    /// The parameter name as declared.
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn spanned_name(&self) -> &Spanned<String> {
        &self.name
    }
}
