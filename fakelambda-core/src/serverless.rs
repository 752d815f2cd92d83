//! # Invocation Interface
//!
//! The capability shared by the in-memory backend and a real remote client:
//! invoke a function by name, with or without an explicit [`Context`].
//!
//! Calling code written against [`Serverless`] (or its object-safe twin
//! [`DynServerless`]) can be pointed at either backend without change.

use crate::{
    context::Context,
    error::InvokeError,
    invoke::{InvokeInput, InvokeOptions, InvokeOutput},
};
use std::{future::Future, pin::Pin};

/// Result of an invocation.
pub type InvokeResult = Result<InvokeOutput, InvokeError>;

/// A backend able to invoke functions by name.
///
/// `input` is optional to mirror the remote API, where an absent request is
/// a reportable error rather than a type error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot invoke functions",
    label = "missing `Serverless` implementation",
    note = "Implement `invoke_with_context`; `invoke` defaults to a background context."
)]
pub trait Serverless: Send + Sync + 'static {
    /// Invoke with a background context and default options.
    fn invoke(&self, input: Option<InvokeInput>) -> impl Future<Output = InvokeResult> + Send {
        self.invoke_with_context(Context::background(), input, InvokeOptions::default())
    }

    /// Invoke with an explicit context and per-call options.
    fn invoke_with_context(
        &self,
        ctx: Context,
        input: Option<InvokeInput>,
        options: InvokeOptions,
    ) -> impl Future<Output = InvokeResult> + Send;
}

/// Object-safe version of [`Serverless`] for dynamic dispatch.
pub trait DynServerless: Send + Sync + 'static {
    /// Invoke with a background context and default options.
    fn invoke_dyn<'a>(
        &'a self,
        input: Option<InvokeInput>,
    ) -> Pin<Box<dyn Future<Output = InvokeResult> + Send + 'a>>;

    /// Invoke with an explicit context and per-call options.
    fn invoke_with_context_dyn<'a>(
        &'a self,
        ctx: Context,
        input: Option<InvokeInput>,
        options: InvokeOptions,
    ) -> Pin<Box<dyn Future<Output = InvokeResult> + Send + 'a>>;
}

impl<T: Serverless> DynServerless for T {
    fn invoke_dyn<'a>(
        &'a self,
        input: Option<InvokeInput>,
    ) -> Pin<Box<dyn Future<Output = InvokeResult> + Send + 'a>> {
        Box::pin(Serverless::invoke(self, input))
    }

    fn invoke_with_context_dyn<'a>(
        &'a self,
        ctx: Context,
        input: Option<InvokeInput>,
        options: InvokeOptions,
    ) -> Pin<Box<dyn Future<Output = InvokeResult> + Send + 'a>> {
        Box::pin(Serverless::invoke_with_context(self, ctx, input, options))
    }
}
