//! Rust struct builder.

use dispatchgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Vec<String>,
    derives: Vec<String>,
    fields: Vec<Field>,
    is_public: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            derives: Vec::new(),
            fields: Vec::new(),
            is_public: true,
        }
    }

    /// Add a doc line.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc.push(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .flat_map(|field| {
                let vis = if field.is_public { "pub " } else { "" };
                field
                    .doc
                    .iter()
                    .cloned()
                    .map(CodeFragment::RustDoc)
                    .chain(std::iter::once(CodeFragment::Line(format!(
                        "{}{}: {},",
                        vis, field.name, field.ty
                    ))))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments: Vec<CodeFragment> =
            self.doc.iter().cloned().map(CodeFragment::RustDoc).collect();

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}struct {} {{}}",
                vis, self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{}struct {} {{", vis, self.name),
                body: self.fields_to_fragments(),
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}
