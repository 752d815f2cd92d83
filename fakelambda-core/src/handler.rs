//! # Function Handlers
//!
//! A handler is the local stand-in for a deployed function: it receives the
//! invocation [`Context`] and the raw request payload, and returns the raw
//! response payload or an error.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|ctx, payload| async move { Ok::<_, BoxError>(payload) }`
//! 2. **Struct implementation**: `impl FunctionHandler for MyFunction`
//!
//! Registries store handlers as [`DynFunctionHandler`] trait objects; every
//! [`FunctionHandler`] converts automatically.

use crate::{context::Context, error::BoxError};
use bytes::Bytes;
use std::{future::Future, pin::Pin, sync::Arc};

/// A locally registered function.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a function handler",
    label = "missing `FunctionHandler` implementation",
    note = "Handlers take `(Context, Bytes)` and return a future of `Result<Bytes, E>` where `E: Into<BoxError>`."
)]
pub trait FunctionHandler: Send + Sync + 'static {
    /// Run the function on `payload`.
    fn call(
        &self,
        ctx: Context,
        payload: Bytes,
    ) -> impl Future<Output = Result<Bytes, BoxError>> + Send;
}

// Blanket impl for closures
impl<F, Fut, E> FunctionHandler for F
where
    F: Fn(Context, Bytes) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Bytes, E>> + Send,
    E: Into<BoxError>,
{
    fn call(
        &self,
        ctx: Context,
        payload: Bytes,
    ) -> impl Future<Output = Result<Bytes, BoxError>> + Send {
        let fut = (self)(ctx, payload);
        async move { fut.await.map_err(Into::<BoxError>::into) }
    }
}

/// Object-safe version of [`FunctionHandler`].
pub trait DynFunctionHandler: Send + Sync + 'static {
    /// Run the function on `payload` (dynamic dispatch version).
    fn call_dyn<'a>(
        &'a self,
        ctx: Context,
        payload: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<Bytes, BoxError>> + Send + 'a>>;
}

impl<T: FunctionHandler> DynFunctionHandler for T {
    fn call_dyn<'a>(
        &'a self,
        ctx: Context,
        payload: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<Bytes, BoxError>> + Send + 'a>> {
        Box::pin(self.call(ctx, payload))
    }
}

/// A shared, type-erased handler.
pub type SharedHandler = Arc<dyn DynFunctionHandler>;
