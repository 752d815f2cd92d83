//! Observation point for event invocations.
//!
//! Event invocations are detached: their outcome never reaches the caller.
//! An [`EventErrorHook`] is the only way to see a failed background run.
//! Without one installed, such errors are dropped.

use crate::error::BoxError;

/// Receives errors raised by handlers running as event invocations.
///
/// Called from the background task, after the handler returned.
pub trait EventErrorHook: Send + Sync + 'static {
    /// Called once per failed event invocation.
    fn on_error(&self, function: &str, error: &BoxError);
}

// Blanket impl for closures
impl<F> EventErrorHook for F
where
    F: Fn(&str, &BoxError) + Send + Sync + 'static,
{
    fn on_error(&self, function: &str, error: &BoxError) {
        (self)(function, error)
    }
}
