//! Rust function builder.

use dispatchgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// Builder for Rust functions and trait method declarations.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Vec<String>,
    is_public: bool,
    receiver: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    /// `None` renders a declaration (`fn f();`).
    body: Option<Vec<CodeFragment>>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            is_public: true,
            receiver: None,
            params: Vec::new(),
            return_type: None,
            body: Some(Vec::new()),
        }
    }

    /// Add a doc line. Call repeatedly for a multi-line comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc.push(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Set the receiver, e.g. `&self`.
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Render a signature without a body.
    pub fn declaration(mut self) -> Self {
        self.body = None;
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body
            .get_or_insert_with(Vec::new)
            .push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a renderable node (e.g. a [`Match`](super::Match)) to the body.
    pub fn body_node(mut self, node: impl Renderable) -> Self {
        self.body
            .get_or_insert_with(Vec::new)
            .extend(node.to_fragments());
        self
    }

    /// Add a prepared fragment (e.g. a nested block) to the body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.get_or_insert_with(Vec::new).push(fragment);
        self
    }

    /// The signature up to, but excluding, the body or the semicolon.
    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let params = self
            .receiver
            .iter()
            .cloned()
            .chain(self.params.iter().map(Param::to_string))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("{}fn {}({}) -> {}", vis, self.name, params, ret),
            None => format!("{}fn {}({})", vis, self.name, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            self.doc.iter().cloned().map(CodeFragment::RustDoc).collect();

        match &self.body {
            None => fragments.push(CodeFragment::Line(format!("{};", self.signature()))),
            Some(body) => fragments.push(CodeFragment::Block {
                header: format!("{} {{", self.signature()),
                body: body.clone(),
                close: Some("}".to_string()),
            }),
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        assert_eq!(Fn::new("reset").build(), "pub fn reset() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("get_widget")
            .param(Param::new("id", "u32"))
            .param(Param::new("out", "&mut Widget"))
            .returns("WidgetResult")
            .body_line("todo!()")
            .build();
        assert_eq!(
            f,
            "pub fn get_widget(id: u32, out: &mut Widget) -> WidgetResult {\n    todo!()\n}\n"
        );
    }

    #[test]
    fn test_declaration_with_receiver() {
        let f = Fn::new("get_widget")
            .private()
            .receiver("&self")
            .param(Param::new("id", "u32"))
            .returns("Result<()>")
            .declaration()
            .build();
        assert_eq!(f, "fn get_widget(&self, id: u32) -> Result<()>;\n");
    }

    #[test]
    fn test_fn_with_doc() {
        let f = Fn::new("run")
            .doc("First line.")
            .doc("")
            .doc("Second paragraph.")
            .build();
        assert!(f.starts_with("/// First line.\n///\n/// Second paragraph.\npub fn run() {\n"));
    }
}
