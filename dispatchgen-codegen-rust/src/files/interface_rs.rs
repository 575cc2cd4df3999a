use std::path::{Path, PathBuf};

use dispatchgen_core::{GeneratedFile, artifact_header};
use dispatchgen_ir::DispatchIR;

use super::{namespace_use, section_title};
use crate::{
    Field, Fn, Param, RustFile, Struct, Trait,
    naming::{RUNTIME, flag_field, fn_name, param_name},
};

/// The interface artifact: the implementation trait and the extension flags.
pub struct InterfaceRs<'a> {
    ir: &'a DispatchIR,
}

impl<'a> InterfaceRs<'a> {
    pub fn new(ir: &'a DispatchIR) -> Self {
        Self { ir }
    }

    fn api_trait(&self) -> Trait {
        let meta = &self.ir.meta;
        let mut api = Trait::new(&meta.trait_name)
            .doc("The implementation a dispatch layer forwards to.")
            .doc("")
            .doc("Every trampoline calls one method through a caller-owned handle.")
            .doc(format!(
                "An `Err` or a panic becomes `{}::RUNTIME_FAILURE`.",
                meta.result_type
            ))
            .supertrait("Send")
            .supertrait("Sync")
            .method(
                Fn::new("extensions")
                    .doc("Extension flags consulted by the resolver.")
                    .private()
                    .receiver("&self")
                    .returns("&Extensions")
                    .declaration(),
            )
            .method(
                Fn::new("register_extension")
                    .doc("Enable `extension_name` if the layer supports it.")
                    .private()
                    .receiver("&self")
                    .param(Param::new("extension_name", "&str"))
                    .body_line("self.extensions().register(extension_name);"),
            );

        let mut section = None;
        for command in self.ir.interface_methods() {
            let title = section_title(&command.requires);
            if title.is_some() && title != section {
                api = api.section(title.clone().unwrap_or_default());
            }
            section = title;

            let returns = if command.returns {
                meta.result_type.as_str()
            } else {
                "()"
            };
            api = api.method(
                Fn::new(fn_name(&command.name))
                    .private()
                    .receiver("&self")
                    .params(
                        command
                            .params
                            .iter()
                            .map(|p| Param::new(param_name(&p.name), &p.ty)),
                    )
                    .returns(format!("{}::Result<{}>", RUNTIME, returns))
                    .declaration(),
            );
        }

        let mut signatures = self.ir.hand_written_signatures().peekable();
        if signatures.peek().is_some() {
            api = api.section("Specially-handled");
            for signature in signatures {
                api = api.verbatim(signature);
            }
        }

        api
    }

    fn extensions_struct(&self) -> Struct {
        self.ir.extensions.iter().fold(
            Struct::new("Extensions")
                .doc("Extensions the layer supports. Every flag starts disabled.")
                .derive("Debug")
                .derive("Default"),
            |s, ext| {
                s.field(
                    Field::new(
                        flag_field(&ext.name),
                        format!("{}::ExtensionFlag", RUNTIME),
                    )
                    .doc(format!("`{}`", ext.name)),
                )
            },
        )
    }
}

impl GeneratedFile for InterfaceRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.ir.meta.interface_file)
    }

    fn render(&self) -> String {
        RustFile::new()
            .use_stmt(namespace_use(&self.ir.meta.namespace))
            .add(self.api_trait())
            .add(self.extensions_struct())
            .render_with_header(&artifact_header())
    }
}
