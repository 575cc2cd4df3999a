//! Hand-written trampolines for commands the generator leaves alone.

use dispatchgen_runtime::forward;

use crate::{
    layer::WidgetApi,
    widget::WidgetResult,
};

/// `CountWidgets`: the count is zeroed first so a failed call never leaves
/// a stale value behind.
pub fn count_widgets(api: &dyn WidgetApi, out: &mut u32) -> WidgetResult {
    *out = 0;
    let result = forward("CountWidgets", &[], || api.count_widgets(out));
    tracing::trace!(count = *out, "counted widgets");
    result
}

/// `DescribeWidget`: the implementation returns an owned description, or
/// `None` for an unknown id.
pub fn describe_widget(api: &dyn WidgetApi, id: u32, out: &mut String) -> WidgetResult {
    forward("DescribeWidget", &[WidgetResult::NotFound], move || {
        match api.describe_widget(id)? {
            Some(description) => {
                *out = description;
                Ok(WidgetResult::Success)
            }
            None => Ok(WidgetResult::NotFound),
        }
    })
}
