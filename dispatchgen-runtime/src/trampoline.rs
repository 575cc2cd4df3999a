//! The single place where implementation failures cross into result codes.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use tracing::field;

use crate::ResultCode;

/// Forward one call to the implementation and return its result code.
///
/// The call runs inside a `trampoline` span tagged with `command`. An `Err`
/// or a panic is logged and becomes [`ResultCode::RUNTIME_FAILURE`]. Any
/// failing code is logged at `error`, or at `debug` when listed in `silent`.
pub fn forward<R, F>(command: &'static str, silent: &[R], call: F) -> R
where
    R: ResultCode,
    F: FnOnce() -> eyre::Result<R>,
{
    let span = tracing::info_span!(
        "trampoline",
        command,
        result = field::Empty,
        error = field::Empty
    );
    let _entered = span.enter();

    let result = match run(call) {
        Ok(result) => result,
        Err(message) => {
            span.record("error", field::display(&message));
            tracing::error!(error = %message, "implementation failed");
            R::RUNTIME_FAILURE
        }
    };

    span.record("result", field::display(result));
    if result.is_failure() {
        if silent.contains(&result) {
            tracing::debug!(%result, "call returned an expected failure");
        } else {
            tracing::error!(%result, "call failed");
        }
    }
    result
}

/// Like [`forward`] for commands without a return value.
///
/// Errors and panics are logged and swallowed.
pub fn forward_void<F>(command: &'static str, call: F)
where
    F: FnOnce() -> eyre::Result<()>,
{
    let span = tracing::info_span!("trampoline", command, error = field::Empty);
    let _entered = span.enter();

    if let Err(message) = run(call) {
        span.record("error", field::display(&message));
        tracing::error!(error = %message, "implementation failed");
    }
}

fn run<T>(call: impl FnOnce() -> eyre::Result<T>) -> Result<T, String> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(report)) => Err(format!("{:#}", report)),
        Err(payload) => Err(format!("panic: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
