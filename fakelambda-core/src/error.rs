//! Error types for fakelambda.
//!
//! - [`InvokeError`] - Everything an invocation can fail with
//! - [`BoxError`] - Opaque error produced by a function handler

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`Serverless`] invocations.
///
/// The first three variants are caller-contract violations, detected before
/// any handler runs. [`InvokeError::Handler`] carries whatever the handler
/// returned, unchanged.
///
/// [`Serverless`]: crate::Serverless
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The request itself was absent.
    #[error("no input")]
    NoInput,

    /// The request carried no function name.
    #[error("no function name")]
    NoFunctionName,

    /// No handler is registered under the requested name.
    #[error("not found function: {0}")]
    FunctionNotFound(String),

    /// The handler ran and failed.
    #[error(transparent)]
    Handler(BoxError),
}

impl InvokeError {
    /// Returns `true` if the error was raised by validation rather than by a handler.
    pub fn is_validation(&self) -> bool {
        !matches!(self, InvokeError::Handler(_))
    }

    /// Consume the error and return the handler's error, if this is one.
    pub fn into_handler_error(self) -> Option<BoxError> {
        match self {
            InvokeError::Handler(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoxError> for InvokeError {
    fn from(err: BoxError) -> Self {
        InvokeError::Handler(err)
    }
}
