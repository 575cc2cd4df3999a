//! Rust trait builder.

use dispatchgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

#[derive(Debug, Clone)]
enum Item {
    Method(Fn),
    /// A `// text` line introducing the items that follow.
    Section(String),
    /// A signature copied as written.
    Verbatim(String),
}

/// Builder for Rust traits.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Vec<String>,
    supertraits: Vec<String>,
    items: Vec<Item>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            supertraits: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Add a doc line.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc.push(doc.into());
        self
    }

    pub fn supertrait(mut self, bound: impl Into<String>) -> Self {
        self.supertraits.push(bound.into());
        self
    }

    /// Add a method. Methods built with [`Fn::declaration`] are required,
    /// the others are provided.
    pub fn method(mut self, method: Fn) -> Self {
        self.items.push(Item::Method(method));
        self
    }

    /// Start a commented section.
    pub fn section(mut self, title: impl Into<String>) -> Self {
        self.items.push(Item::Section(title.into()));
        self
    }

    /// Add a hand-written item. A trailing `;` is added when missing.
    pub fn verbatim(mut self, item: impl Into<String>) -> Self {
        self.items.push(Item::Verbatim(item.into()));
        self
    }

    /// Build the trait as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn items_to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        let mut after_section = true;

        for item in &self.items {
            if !after_section {
                fragments.push(CodeFragment::Blank);
            }
            match item {
                Item::Method(method) => {
                    fragments.extend(method.to_fragments());
                    after_section = false;
                }
                Item::Section(title) => {
                    fragments.push(CodeFragment::Comment(title.clone()));
                    after_section = true;
                }
                Item::Verbatim(text) => {
                    let text = text.trim();
                    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
                    if !text.ends_with(';') && !text.ends_with('}')
                        && let Some(last) = lines.last_mut()
                    {
                        last.push(';');
                    }
                    fragments.extend(lines.into_iter().map(CodeFragment::Line));
                    after_section = false;
                }
            }
        }

        fragments
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            self.doc.iter().cloned().map(CodeFragment::RustDoc).collect();

        let header = if self.supertraits.is_empty() {
            format!("pub trait {} {{", self.name)
        } else {
            format!("pub trait {}: {} {{", self.name, self.supertraits.join(" + "))
        };

        fragments.push(CodeFragment::Block {
            header,
            body: self.items_to_fragments(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_with_bounds() {
        let t = Trait::new("WidgetApi").supertrait("Send").supertrait("Sync").build();
        assert_eq!(t, "pub trait WidgetApi: Send + Sync {\n}\n");
    }

    #[test]
    fn test_required_and_provided_methods() {
        let t = Trait::new("WidgetApi")
            .method(Fn::new("extensions").private().receiver("&self").returns("&Extensions").declaration())
            .method(
                Fn::new("register_extension")
                    .private()
                    .receiver("&self")
                    .body_line("self.extensions().register(extension_name);"),
            )
            .build();
        assert!(t.contains("    fn extensions(&self) -> &Extensions;\n\n    fn register_extension(&self) {\n"));
    }

    #[test]
    fn test_sections_and_verbatim_items() {
        let t = Trait::new("WidgetApi")
            .section("X_color")
            .method(Fn::new("get_widget_color").private().receiver("&self").declaration())
            .section("Specially-handled")
            .verbatim("fn reset_widgets(&self, hard: bool) -> Result<()>")
            .build();
        assert_eq!(
            t,
            "pub trait WidgetApi {\n    // X_color\n    fn get_widget_color(&self);\n\n    // Specially-handled\n    fn reset_widgets(&self, hard: bool) -> Result<()>;\n}\n"
        );
    }
}
