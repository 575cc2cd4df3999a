use std::path::{Path, PathBuf};

use dispatchgen_codegen::builder::CodeFragment;
use dispatchgen_core::{GeneratedFile, artifact_header};
use dispatchgen_ir::{CommandIR, DispatchIR};

use super::namespace_use;
use crate::{
    Arm, Enum, Fn, Impl, Match, Param, RustFile, Variant,
    naming::{RUNTIME, flag_field, fn_name, param_name, variant_name},
};

/// The implementation artifact: trampolines, the `Proc` type, the resolver
/// and extension registration.
pub struct DispatchRs<'a> {
    ir: &'a DispatchIR,
}

impl<'a> DispatchRs<'a> {
    pub fn new(ir: &'a DispatchIR) -> Self {
        Self { ir }
    }

    fn handle_type(&self) -> String {
        format!("&dyn {}", self.ir.meta.trait_name)
    }

    fn resolver_return(&self) -> String {
        format!("::core::result::Result<Proc, {}>", self.ir.meta.result_type)
    }

    fn trampoline(&self, command: &CommandIR) -> Fn {
        let meta = &self.ir.meta;
        let method = fn_name(&command.name);
        let args = command
            .params
            .iter()
            .map(|p| param_name(&p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let f = Fn::new(&method)
            .doc(format!(
                "Forwards `{}` to [`{}::{}`].",
                command.name, meta.trait_name, method
            ))
            .param(Param::new("api", self.handle_type()))
            .params(
                command
                    .params
                    .iter()
                    .map(|p| Param::new(param_name(&p.name), &p.ty)),
            );

        if command.returns {
            let silent = command
                .silent
                .iter()
                .map(|code| format!("{}::{}", meta.result_type, code))
                .collect::<Vec<_>>()
                .join(", ");
            f.returns(&meta.result_type).body_line(format!(
                "{}::forward(\"{}\", &[{}], move || api.{}({}))",
                RUNTIME, command.name, silent, method, args
            ))
        } else {
            f.body_line(format!(
                "{}::forward_void(\"{}\", move || api.{}({}));",
                RUNTIME, command.name, method, args
            ))
        }
    }

    /// Function-pointer type of a command's trampoline.
    fn proc_type(&self, command: &CommandIR) -> String {
        let params = std::iter::once(self.handle_type())
            .chain(command.params.iter().map(|p| p.ty.clone()))
            .collect::<Vec<_>>()
            .join(", ");
        if command.returns {
            format!("fn({}) -> {}", params, self.ir.meta.result_type)
        } else {
            format!("fn({})", params)
        }
    }

    fn proc_enum(&self) -> Enum {
        let resolver = Variant::new(variant_name(&self.ir.meta.resolver)).tuple(format!(
            "fn({}, &str) -> {}",
            self.handle_type(),
            self.resolver_return()
        ));

        self.ir.commands.iter().fold(
            Enum::new("Proc")
                .doc("An entry point returned by the resolver, tagged with its command.")
                .derive("Clone")
                .derive("Copy")
                .variant(resolver),
            |e, command| {
                e.variant(Variant::new(variant_name(&command.name)).tuple(self.proc_type(command)))
            },
        )
    }

    fn proc_impl(&self) -> Impl {
        let arm = |name: &str| Arm::new(format!("Proc::{}(_)", variant_name(name)), format!("\"{}\"", name));
        let names = Match::new("self")
            .arm(arm(&self.ir.meta.resolver))
            .arms(self.ir.commands.iter().map(|c| arm(&c.name)));

        Impl::new("Proc").method(
            Fn::new("name")
                .doc("The command name this entry point was resolved from.")
                .receiver("&self")
                .returns("&'static str")
                .body_node(names),
        )
    }

    fn table_entry(&self, command: &CommandIR) -> String {
        let target = command
            .trampoline
            .hand_written_path()
            .map(str::to_string)
            .unwrap_or_else(|| fn_name(&command.name));
        let proc = format!("Proc::{}({})", variant_name(&command.name), target);

        if command.requires.is_empty() {
            format!("table.insert(\"{}\", {});", command.name, proc)
        } else {
            let gate = command
                .requires
                .iter()
                .map(|ext| format!("ext.{}.is_enabled()", flag_field(ext)))
                .collect::<Vec<_>>()
                .join(" && ");
            format!(
                "table.insert_gated(\"{}\", {}, |ext: &Extensions| {});",
                command.name, proc, gate
            )
        }
    }

    fn resolver(&self) -> Fn {
        let meta = &self.ir.meta;
        let resolver = fn_name(&meta.resolver);

        let mut entries = vec![CodeFragment::Line(format!(
            "let mut table = {}::ProcTable::new();",
            RUNTIME
        ))];
        entries.push(CodeFragment::Line(format!(
            "table.insert(\"{}\", Proc::{}({}));",
            meta.resolver,
            variant_name(&meta.resolver),
            resolver
        )));
        entries.extend(
            self.ir
                .commands
                .iter()
                .map(|c| CodeFragment::Line(self.table_entry(c))),
        );
        entries.push(CodeFragment::line("table"));

        Fn::new(&resolver)
            .doc("Resolve an entry point by exact name.")
            .doc("")
            .doc("Core commands always resolve. Extension commands resolve while every")
            .doc(format!(
                "extension they require is registered. Anything else is `{}::FUNCTION_UNSUPPORTED`.",
                meta.result_type
            ))
            .param(Param::new("api", self.handle_type()))
            .param(Param::new("name", "&str"))
            .returns(self.resolver_return())
            .body_line(format!(
                "static TABLE: ::std::sync::OnceLock<{}::ProcTable<Extensions, Proc>> = ::std::sync::OnceLock::new();",
                RUNTIME
            ))
            .body_fragment(CodeFragment::block(
                "let table = TABLE.get_or_init(|| {",
                entries,
                Some("});".to_string()),
            ))
            .body_line("table")
            .body_fragment(CodeFragment::indent(vec![
                CodeFragment::line(".resolve(name, api.extensions())"),
                CodeFragment::Line(format!(
                    ".ok_or(<{} as {}::ResultCode>::FUNCTION_UNSUPPORTED)",
                    meta.result_type, RUNTIME
                )),
            ]))
    }

    fn extensions_impl(&self) -> Impl {
        let extensions = &self.ir.extensions;

        let register = Fn::new("register")
            .doc("Enable a supported extension by exact name. Unknown names are ignored.")
            .receiver("&self")
            .param(Param::new("extension_name", "&str"));
        let is_registered = Fn::new("is_registered")
            .doc("Whether a supported extension has been enabled.")
            .receiver("&self")
            .param(Param::new("extension_name", "&str"))
            .returns("bool");

        let (register, is_registered) = if extensions.is_empty() {
            (
                register.body_line("let _ = extension_name;"),
                is_registered
                    .body_line("let _ = extension_name;")
                    .body_line("false"),
            )
        } else {
            let arms = |call: &str, fallback: &str| {
                Match::new("extension_name")
                    .arms(extensions.iter().map(|ext| {
                        Arm::new(
                            format!("\"{}\"", ext.name),
                            format!("self.{}.{}()", flag_field(&ext.name), call),
                        )
                    }))
                    .arm(Arm::new("_", fallback))
            };
            (
                register.body_node(arms("enable", "{}")),
                is_registered.body_node(arms("is_enabled", "false")),
            )
        };

        Impl::new("Extensions").method(register).method(is_registered)
    }
}

impl GeneratedFile for DispatchRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.ir.meta.dispatch_file)
    }

    fn render(&self) -> String {
        RustFile::new()
            .use_stmt(namespace_use(&self.ir.meta.namespace))
            .add_all(
                self.ir
                    .generated_trampolines()
                    .map(|command| self.trampoline(command)),
            )
            .add(self.proc_enum())
            .add(self.proc_impl())
            .add(self.resolver())
            .add(self.extensions_impl())
            .render_with_header(&artifact_header())
    }
}

#[cfg(test)]
mod tests {
    use dispatchgen_codegen::{pipeline::phases::lower, testing};

    use super::*;

    fn render(extra: &str) -> String {
        let ir = lower(
            &testing::widget_schema(),
            &testing::widget_policy_with(extra, false),
        )
        .unwrap();
        DispatchRs::new(&ir).render()
    }

    #[test]
    fn test_returning_trampoline_with_silent_code() {
        let code = render("");
        assert!(code.contains(
            "pub fn get_widget(api: &dyn WidgetApi, id: u32, out: &mut Widget) -> WidgetResult {\n    ::dispatchgen_runtime::forward(\"GetWidget\", &[WidgetResult::NotFound], move || api.get_widget(id, out))\n}\n"
        ));
    }

    #[test]
    fn test_void_trampoline() {
        let code = render("");
        assert!(code.contains(
            "pub fn reset_widgets(api: &dyn WidgetApi) {\n    ::dispatchgen_runtime::forward_void(\"ResetWidgets\", move || api.reset_widgets());\n}\n"
        ));
    }

    #[test]
    fn test_proc_variants() {
        let code = render("");
        assert!(code.contains("#[derive(Clone, Copy)]\npub enum Proc {"));
        assert!(code.contains(
            "    GetProcAddr(fn(&dyn WidgetApi, &str) -> ::core::result::Result<Proc, WidgetResult>),\n"
        ));
        assert!(code.contains("    ResetWidgets(fn(&dyn WidgetApi)),\n"));
        assert!(code.contains("            Proc::GetWidgetColor(_) => \"GetWidgetColor\",\n"));
        assert!(!code.contains("GetWidgetShape"));
    }

    #[test]
    fn test_resolver_table() {
        let code = render("");
        assert!(code.contains(
            "pub fn get_proc_addr(api: &dyn WidgetApi, name: &str) -> ::core::result::Result<Proc, WidgetResult> {"
        ));
        assert!(code.contains("        table.insert(\"GetProcAddr\", Proc::GetProcAddr(get_proc_addr));\n"));
        assert!(code.contains("        table.insert(\"GetWidget\", Proc::GetWidget(get_widget));\n"));
        assert!(code.contains(
            "        table.insert_gated(\"GetWidgetColor\", Proc::GetWidgetColor(get_widget_color), |ext: &Extensions| ext.has_x_color.is_enabled());\n"
        ));
        assert!(code.contains(
            "    table\n        .resolve(name, api.extensions())\n        .ok_or(<WidgetResult as ::dispatchgen_runtime::ResultCode>::FUNCTION_UNSUPPORTED)\n}\n"
        ));
    }

    #[test]
    fn test_special_uses_declared_trampoline() {
        let code = render("[special.GetWidget]\ntrampoline = \"crate::widget::get_widget\"");
        assert!(!code.contains("pub fn get_widget("));
        assert!(code.contains(
            "table.insert(\"GetWidget\", Proc::GetWidget(crate::widget::get_widget));"
        ));
    }

    #[test]
    fn test_gate_is_a_conjunction() {
        let schema = testing::schema(
            r#"
[[commands]]
name = "Blend"
requires = ["X_color", "X_shape"]
"#,
        );
        let policy = testing::policy(&testing::WIDGET_POLICY.replace(
            "extensions = [\"X_color\"]",
            "extensions = [\"X_color\", \"X_shape\"]",
        ));
        let ir = lower(&schema, &policy).unwrap();
        let code = DispatchRs::new(&ir).render();
        assert!(code.contains("|ext: &Extensions| ext.has_x_color.is_enabled() && ext.has_x_shape.is_enabled()"));
    }

    #[test]
    fn test_registration() {
        let code = render("");
        assert!(code.contains(
            "        match extension_name {\n            \"X_color\" => self.has_x_color.enable(),\n            _ => {},\n        }\n"
        ));
        assert!(code.contains("            \"X_color\" => self.has_x_color.is_enabled(),\n            _ => false,\n"));
    }

    #[test]
    fn test_registration_without_extensions() {
        let policy = testing::policy(&testing::WIDGET_POLICY.replace("extensions = [\"X_color\"]", ""));
        let schema = testing::schema("[[commands]]\nname = \"GetWidget\"\n");
        let ir = lower(&schema, &policy).unwrap();
        let code = DispatchRs::new(&ir).render();
        assert!(code.contains("    pub fn register(&self, extension_name: &str) {\n        let _ = extension_name;\n    }\n"));
        assert!(code.contains("        let _ = extension_name;\n        false\n"));
    }
}
