use std::path::Path;

use dispatchgen_codegen::pipeline::CompilationContext;
use dispatchgen_core::{GenerateResult, GeneratedFile, LanguageCodegen, PreviewFile, write_all};
use dispatchgen_ir::DispatchIR;
use eyre::Result;

use crate::files::{DispatchRs, InterfaceRs};

/// Emits the interface and implementation artifacts of a dispatch layer.
pub struct Generator {
    ir: DispatchIR,
}

impl LanguageCodegen for Generator {
    fn preview(&self) -> Vec<PreviewFile> {
        let meta = &self.ir.meta;
        vec![
            PreviewFile {
                path: meta.interface_file.clone(),
                content: InterfaceRs::new(&self.ir).render(),
            },
            PreviewFile {
                path: meta.dispatch_file.clone(),
                content: DispatchRs::new(&self.ir).render(),
            },
        ]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let meta = &self.ir.meta;

        write_all(
            output_dir,
            &[&InterfaceRs::new(&self.ir), &DispatchRs::new(&self.ir)],
        )?;

        let result = GenerateResult {
            written: vec![meta.interface_file.clone(), meta.dispatch_file.clone()],
            trampolines: self.ir.generated_trampolines().count(),
            resolvable: self.ir.resolvable_count(),
        };
        tracing::info!(
            output = %output_dir.display(),
            commands = self.ir.commands.len(),
            trampolines = result.trampolines,
            resolvable = result.resolvable,
            "generated dispatch layer"
        );
        Ok(result)
    }
}

impl Generator {
    pub fn new(ir: DispatchIR) -> Self {
        Self { ir }
    }

    /// Take the IR a pipeline run produced.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        Ok(Self::new(ctx.take_ir()?))
    }
}

#[cfg(test)]
mod tests {
    use dispatchgen_codegen::{pipeline::Pipeline, testing};
    use tempfile::TempDir;

    use super::*;

    fn widget_generator() -> Generator {
        let ctx = Pipeline::new()
            .run(testing::widget_schema(), testing::widget_policy())
            .unwrap();
        Generator::from_context(ctx).unwrap()
    }

    #[test]
    fn test_preview_lists_both_artifacts() {
        let files = widget_generator().preview();
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["interface.rs", "dispatch.rs"]);
    }

    #[test]
    fn test_generate_writes_preview_content() {
        let temp = TempDir::new().unwrap();
        let generator = widget_generator();

        let result = generator.generate(temp.path()).unwrap();
        assert_eq!(result.written, ["interface.rs", "dispatch.rs"]);
        assert_eq!(result.trampolines, 3);
        assert_eq!(result.resolvable, 4);

        for file in generator.preview() {
            let written = std::fs::read_to_string(temp.path().join(&file.path)).unwrap();
            assert_eq!(written, file.content);
        }
    }

    #[test]
    fn test_failed_generate_leaves_old_artifacts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("interface.rs"), "// old").unwrap();
        std::fs::create_dir(temp.path().join("dispatch.rs.tmp")).unwrap();

        assert!(widget_generator().generate(temp.path()).is_err());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("interface.rs")).unwrap(),
            "// old"
        );
        assert!(!temp.path().join("interface.rs.tmp").exists());
    }

    #[test]
    fn test_from_context_without_ir_fails() {
        let ctx = CompilationContext::new(testing::widget_schema(), testing::widget_policy());
        assert!(Generator::from_context(ctx).is_err());
    }
}
