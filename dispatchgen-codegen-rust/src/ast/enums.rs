//! Rust enum builder.

use dispatchgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A variant in a Rust enum.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub doc: Option<String>,
    pub data: Option<String>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            data: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set tuple data for the variant, e.g., `GetWidget(fn(u32))`.
    pub fn tuple(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Builder for Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Vec<String>,
    derives: Vec<String>,
    variants: Vec<Variant>,
    is_public: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            derives: Vec::new(),
            variants: Vec::new(),
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

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn variants_to_fragments(&self) -> Vec<CodeFragment> {
        self.variants
            .iter()
            .flat_map(|variant| {
                let mut fragments = Vec::new();

                if let Some(doc) = &variant.doc {
                    fragments.push(CodeFragment::RustDoc(doc.clone()));
                }

                let variant_str = match &variant.data {
                    Some(data) => format!("{}({}),", variant.name, data),
                    None => format!("{},", variant.name),
                };
                fragments.push(CodeFragment::Line(variant_str));

                fragments
            })
            .collect()
    }
}

impl Renderable for Enum {
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

        if self.variants.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}enum {} {{}}",
                vis, self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{}enum {} {{", vis, self.name),
                body: self.variants_to_fragments(),
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_enum() {
        assert_eq!(Enum::new("Empty").build(), "pub enum Empty {}\n");
    }

    #[test]
    fn test_enum_with_tuple_variants() {
        let e = Enum::new("Proc")
            .derive("Clone")
            .derive("Copy")
            .variant(Variant::new("GetWidget").tuple("fn(u32) -> WidgetResult"))
            .variant(Variant::new("ResetWidgets").tuple("fn()").doc("Reset."))
            .build();
        assert!(e.contains("#[derive(Clone, Copy)]\npub enum Proc {"));
        assert!(e.contains("    GetWidget(fn(u32) -> WidgetResult),\n"));
        assert!(e.contains("    /// Reset.\n    ResetWidgets(fn()),\n"));
    }
}
