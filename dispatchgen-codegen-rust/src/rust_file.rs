//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with a header,
//! imports and body content.

use dispatchgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A glob `use` statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    allow_unused: bool,
}

impl Use {
    /// `use module::*;`
    pub fn glob(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            allow_unused: false,
        }
    }

    /// Prefix the statement with `#[allow(unused_imports)]`.
    pub fn allow_unused(mut self) -> Self {
        self.allow_unused = true;
        self
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if self.allow_unused {
            fragments.push(CodeFragment::line("#[allow(unused_imports)]"));
        }
        fragments.push(CodeFragment::Line(format!("use {}::*;", self.module)));
        fragments
    }
}

/// A structured representation of a Rust file.
///
/// Organizes code into imports and body sections.
///
/// # Example
///
/// ```ignore
/// let file = RustFile::new()
///     .use_stmt(Use::glob("crate::widget"))
///     .add(extensions_struct)
///     .add(extensions_impl)
///     .render_with_header(&artifact_header());
/// ```
#[derive(Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file below a header comment block.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();

        for use_stmt in &self.uses {
            builder.emit(use_stmt);
        }

        if !self.uses.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
