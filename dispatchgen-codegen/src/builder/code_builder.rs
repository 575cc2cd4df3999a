//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates indented code from [`Renderable`] nodes.
///
/// ```
/// use dispatchgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::rust();
/// builder.apply_fragment(CodeFragment::block(
///     "fn main() {",
///     vec![CodeFragment::line("run();")],
///     Some("}".to_string()),
/// ));
/// assert_eq!(builder.build(), "fn main() {\n    run();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Add a line of code with current indentation.
    fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    fn push_rust_doc(&mut self, text: &str) -> &mut Self {
        self.push_prefixed("///", text)
    }

    fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_prefixed("//", text)
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::RustDoc(text) => {
                self.push_rust_doc(&text);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_prefixed(&mut self, prefix: &str, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(prefix);
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::rust();
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_basic_line() {
        assert_eq!(render(vec![CodeFragment::line("let x = 1;")]), "let x = 1;\n");
    }

    #[test]
    fn test_block_indents_body() {
        let code = render(vec![CodeFragment::block(
            "match name {",
            vec![
                CodeFragment::line("\"A\" => {}"),
                CodeFragment::line("\"B\" => {}"),
            ],
            Some("}".to_string()),
        )]);
        assert_eq!(code, "match name {\n    \"A\" => {}\n    \"B\" => {}\n}\n");
    }

    #[test]
    fn test_comments() {
        let code = render(vec![
            CodeFragment::RustDoc("A test function".to_string()),
            CodeFragment::comment("note"),
            CodeFragment::comment(""),
            CodeFragment::line("fn test() {}"),
        ]);
        assert_eq!(code, "/// A test function\n// note\n//\nfn test() {}\n");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let code = render(vec![CodeFragment::indent(vec![
            CodeFragment::line("a;"),
            CodeFragment::Blank,
            CodeFragment::line("b;"),
        ])]);
        assert_eq!(code, "    a;\n\n    b;\n");
    }

    #[test]
    fn test_emit_nested_fragments() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("resolver"),
                    CodeFragment::block(
                        "fn f() {",
                        vec![CodeFragment::indent(vec![CodeFragment::line("x;")])],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::rust();
        builder.emit(&Node);
        assert_eq!(builder.build(), "// resolver\nfn f() {\n        x;\n}\n");
    }
}
