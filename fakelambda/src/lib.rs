//! # fakelambda - In-Process Function Invocation Double
//!
//! `fakelambda` stands in for a remote "invoke function by name" service so
//! code that calls functions can be tested without network access or
//! credentials. Functions are local async handlers registered under a name;
//! invocations follow the remote API's two modes:
//!
//! - **Request/response** (default): the handler runs to completion and its
//!   output, or its error, is returned unchanged.
//! - **Event**: the handler is started in the background with a fresh
//!   context and the call returns `202` at once. The outcome is dropped
//!   unless an [`EventErrorHook`] is installed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fakelambda::prelude::*;
//!
//! async fn reverse(_ctx: Context, payload: Bytes) -> Result<Bytes, BoxError> {
//!     Ok(payload.iter().rev().copied().collect())
//! }
//!
//! let fake = Fake::new([with_function("reverse", reverse)]);
//! let out = fake
//!     .invoke(Some(InvokeInput::new("reverse").payload("abc")))
//!     .await?;
//! assert_eq!(out.payload.as_deref(), Some(&b"cba"[..]));
//! ```
//!
//! Calling code that should not care which backend it talks to takes a
//! [`Serverless`] (or `&dyn` [`DynServerless`]), or uses the process-wide
//! backend from [`serverless()`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod global;

pub use bytes::Bytes;

pub use fakelambda_core::{
    BoxError,
    CancellationToken,
    Context,
    DynFunctionHandler,
    DynServerless,
    EventErrorHook,
    FunctionHandler,
    InvocationType,
    InvokeError,
    InvokeInput,
    InvokeOptions,
    InvokeOutput,
    InvokeResult,
    STATUS_ACCEPTED,
    Serverless,
    SharedHandler,
};

pub use fakelambda_std::{
    Fake, FakeBuilder, FakeOption, FunctionRegistry, with_error_hook, with_function,
};

pub use global::{init_backend, init_fake, serverless};

#[cfg(feature = "json")]
pub use fakelambda_std::json::{JsonHandler, json_handler};

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use fakelambda_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use fakelambda_std::testing::*;
}

/// Prelude module - common imports for fakelambda.
///
/// # Usage
///
/// ```rust,ignore
/// use fakelambda::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Bytes, Context, DynServerless, Fake, FunctionHandler, InvocationType,
        InvokeError, InvokeInput, InvokeOptions, InvokeOutput, Serverless, with_error_hook,
        with_function,
    };
}
