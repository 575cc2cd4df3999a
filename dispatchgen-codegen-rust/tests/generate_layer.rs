//! End-to-end generation from schema and policy text.

use dispatchgen_codegen::{pipeline::Pipeline, testing};
use dispatchgen_codegen_rust::{Generator, LanguageCodegen};
use dispatchgen_core::artifact_header;

fn generate(schema: &str, policy: &str) -> (String, String) {
    let ctx = Pipeline::new()
        .run(testing::schema(schema), testing::policy(policy))
        .expect("pipeline should succeed");
    let files = Generator::from_context(ctx).unwrap().preview();
    (files[0].content.clone(), files[1].content.clone())
}

fn body(artifact: &str) -> &str {
    artifact
        .strip_prefix(&artifact_header())
        .expect("artifact starts with the header")
        .trim_start()
}

const EXCLUSIONS: &str = r#"
excluded = ["ResetWidgets"]
extensions = ["X_color"]

[output]
namespace = "crate::widget"
trait_name = "WidgetApi"
result_type = "WidgetResult"
resolver = "GetProcAddr"

[special.GetWidget]
trampoline = "crate::widget::get_widget"
"#;

#[test]
fn test_output_is_deterministic() {
    let first = generate(testing::WIDGET_SCHEMA, testing::WIDGET_POLICY);
    let second = generate(testing::WIDGET_SCHEMA, testing::WIDGET_POLICY);
    assert_eq!(first, second);
}

#[test]
fn test_every_surviving_command_is_resolvable_once() {
    let (_, dispatch) = generate(testing::WIDGET_SCHEMA, testing::WIDGET_POLICY);
    for name in ["GetProcAddr", "GetWidget", "ResetWidgets", "GetWidgetColor"] {
        let entry = format!("(\"{}\", Proc::{}(", name, name);
        assert_eq!(dispatch.matches(&entry).count(), 1, "{}", name);
    }
    assert!(!dispatch.contains("GetWidgetShape"));
}

fn methods(interface: &str, method: &str) -> usize {
    interface.matches(&format!("fn {}(&self", method)).count()
}

fn trampolines(dispatch: &str, method: &str) -> usize {
    dispatch.matches(&format!("pub fn {}(api", method)).count()
}

#[test]
fn test_each_command_gets_one_method_and_one_trampoline() {
    let (interface, dispatch) = generate(testing::WIDGET_SCHEMA, testing::WIDGET_POLICY);
    for method in ["get_widget", "reset_widgets", "get_widget_color"] {
        assert_eq!(methods(&interface, method), 1, "{}", method);
        assert_eq!(trampolines(&dispatch, method), 1, "{}", method);
    }
    assert_eq!(methods(&interface, "get_widget_shape"), 0);
    assert_eq!(trampolines(&dispatch, "get_widget_shape"), 0);
}

#[test]
fn test_policy_sets_remove_methods_and_trampolines() {
    let policy = format!(
        "{}\n[very_special.GetWidgetColor]\ntrampoline = \"crate::widget::get_color\"\nsignature = \"fn color_of(&self, id: u32) -> ::dispatchgen_runtime::Result<Color>\"\n",
        EXCLUSIONS
    );
    let (interface, dispatch) = generate(testing::WIDGET_SCHEMA, &policy);

    // excluded
    assert_eq!(methods(&interface, "reset_widgets"), 0);
    assert_eq!(trampolines(&dispatch, "reset_widgets"), 0);
    // special
    assert_eq!(methods(&interface, "get_widget"), 1);
    assert_eq!(trampolines(&dispatch, "get_widget"), 0);
    // very special
    assert_eq!(methods(&interface, "get_widget_color"), 0);
    assert_eq!(methods(&interface, "color_of"), 1);
    assert_eq!(trampolines(&dispatch, "get_widget_color"), 0);
}

#[test]
fn test_excluded_command_appears_nowhere() {
    let (interface, dispatch) = generate(testing::WIDGET_SCHEMA, EXCLUSIONS);
    assert!(!interface.contains("reset_widgets"));
    assert!(!dispatch.contains("ResetWidgets"));
    assert!(!dispatch.contains("reset_widgets"));
}

#[test]
fn test_special_command_keeps_method_but_not_trampoline() {
    let (interface, dispatch) = generate(testing::WIDGET_SCHEMA, EXCLUSIONS);
    assert!(interface.contains("fn get_widget(&self, id: u32, out: &mut Widget)"));
    assert!(!dispatch.contains("pub fn get_widget("));
    assert!(dispatch.contains("Proc::GetWidget(crate::widget::get_widget)"));
}

#[test]
fn test_both_artifacts_carry_header_and_namespace() {
    let (interface, dispatch) = generate(testing::WIDGET_SCHEMA, testing::WIDGET_POLICY);
    for artifact in [&interface, &dispatch] {
        assert!(artifact.starts_with("// *********** THIS FILE IS GENERATED - DO NOT EDIT ***********\n// MIT License\n"));
        assert!(body(artifact).starts_with("#[allow(unused_imports)]\nuse crate::widget::*;\n"));
    }
}

#[test]
fn test_namespace_override() {
    let policy = testing::WIDGET_POLICY.replace("namespace = \"crate::widget\"\n", "");
    let ctx = Pipeline::new()
        .run(
            testing::widget_schema(),
            testing::policy(&policy).with_namespace("crate::api"),
        )
        .unwrap();
    let files = Generator::from_context(ctx).unwrap().preview();
    assert!(files.iter().all(|f| f.content.contains("use crate::api::*;")));
}

#[test]
fn test_minimal_interface() {
    let (interface, _) = generate(
        "[[commands]]\nname = \"Ping\"\n",
        r#"
[output]
namespace = "crate::api"
trait_name = "Api"
result_type = "Code"
resolver = "Lookup"
"#,
    );

    insta::assert_snapshot!(body(&interface), @r###"
#[allow(unused_imports)]
use crate::api::*;

/// The implementation a dispatch layer forwards to.
///
/// Every trampoline calls one method through a caller-owned handle.
/// An `Err` or a panic becomes `Code::RUNTIME_FAILURE`.
pub trait Api: Send + Sync {
    /// Extension flags consulted by the resolver.
    fn extensions(&self) -> &Extensions;

    /// Enable `extension_name` if the layer supports it.
    fn register_extension(&self, extension_name: &str) {
        self.extensions().register(extension_name);
    }

    fn ping(&self) -> ::dispatchgen_runtime::Result<Code>;
}

/// Extensions the layer supports. Every flag starts disabled.
#[derive(Debug, Default)]
pub struct Extensions {}
"###);
}
