//! Rust match expression builder.

use dispatchgen_codegen::builder::{CodeFragment, Renderable};

/// One `pattern => expression,` arm.
#[derive(Debug, Clone)]
pub struct Arm {
    pub pattern: String,
    pub expr: String,
}

impl Arm {
    pub fn new(pattern: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            expr: expr.into(),
        }
    }
}

/// Builder for a `match` expression used as a statement or tail.
#[derive(Debug, Clone)]
pub struct Match {
    scrutinee: String,
    arms: Vec<Arm>,
}

impl Match {
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            scrutinee: scrutinee.into(),
            arms: Vec::new(),
        }
    }

    pub fn arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }

    pub fn arms(mut self, arms: impl IntoIterator<Item = Arm>) -> Self {
        self.arms.extend(arms);
        self
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: format!("match {} {{", self.scrutinee),
            body: self
                .arms
                .iter()
                .map(|arm| CodeFragment::Line(format!("{} => {},", arm.pattern, arm.expr)))
                .collect(),
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use dispatchgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_match() {
        let m = Match::new("extension_name")
            .arm(Arm::new("\"X_color\"", "self.has_x_color.enable()"))
            .arm(Arm::new("_", "{}"));
        let mut builder = CodeBuilder::rust();
        builder.emit(&m);
        assert_eq!(
            builder.build(),
            "match extension_name {\n    \"X_color\" => self.has_x_color.enable(),\n    _ => {},\n}\n"
        );
    }
}
