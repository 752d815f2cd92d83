//! Logging hook for failed event invocations.

use fakelambda_core::{BoxError, EventErrorHook};

/// A hook that logs event invocation errors.
///
/// Logs through `tracing` at `warn` when the `tracing` feature is enabled;
/// otherwise the error is dropped, same as with no hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHook;

impl EventErrorHook for LoggingHook {
    fn on_error(&self, function: &str, error: &BoxError) {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(function, error = %error, "Event invocation failed");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (function, error); // Suppress unused warning
        }
    }
}
