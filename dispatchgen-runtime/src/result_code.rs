use std::fmt::{Debug, Display};

/// The API's result-code type, as seen by the generated layer.
///
/// `Display` output ends up in trace records, so keep it short.
pub trait ResultCode: Copy + PartialEq + Debug + Display + Send + Sync + 'static {
    /// The call completed.
    const SUCCESS: Self;
    /// The implementation failed with an error or panicked.
    const RUNTIME_FAILURE: Self;
    /// The resolver has no active entry point for the requested name.
    const FUNCTION_UNSUPPORTED: Self;

    /// Whether this code reports a failure.
    ///
    /// Defaults to anything other than [`ResultCode::SUCCESS`]; override when
    /// the API has qualified success codes.
    fn is_failure(self) -> bool {
        self != Self::SUCCESS
    }
}
