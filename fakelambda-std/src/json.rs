//! JSON payload adapter.
//!
//! Lets a function be written against typed input and output instead of raw
//! bytes:
//!
//! ```rust,ignore
//! async fn process(_ctx: Context, order: Order) -> Result<Receipt, BoxError> { ... }
//!
//! let fake = Fake::new([with_function("process_order", json_handler(process))]);
//! ```
//!
//! A payload that does not decode into `In`, or an output that does not
//! encode, fails the invocation like any other handler error.

use bytes::Bytes;
use fakelambda_core::{BoxError, Context, FunctionHandler};
use serde::{Serialize, de::DeserializeOwned};
use std::{future::Future, marker::PhantomData};

/// A handler that decodes its payload from JSON and encodes its output as JSON.
pub struct JsonHandler<F, In, Out> {
    f: F,
    _marker: PhantomData<fn(In) -> Out>,
}

/// Wrap a typed function as a [`JsonHandler`].
pub fn json_handler<F, In, Out, Fut, E>(f: F) -> JsonHandler<F, In, Out>
where
    F: Fn(Context, In) -> Fut,
    Fut: Future<Output = Result<Out, E>>,
{
    JsonHandler {
        f,
        _marker: PhantomData,
    }
}

impl<F, In, Out, Fut, E> FunctionHandler for JsonHandler<F, In, Out>
where
    F: Fn(Context, In) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Out, E>> + Send,
    In: DeserializeOwned + Send + 'static,
    Out: Serialize + 'static,
    E: Into<BoxError>,
{
    fn call(
        &self,
        ctx: Context,
        payload: Bytes,
    ) -> impl Future<Output = Result<Bytes, BoxError>> + Send {
        let decoded = serde_json::from_slice::<In>(&payload);
        async move {
            let input = decoded?;
            let output = (self.f)(ctx, input).await.map_err(Into::<BoxError>::into)?;
            let encoded = serde_json::to_vec(&output)?;
            Ok::<_, BoxError>(Bytes::from(encoded))
        }
    }
}
