//! # fakelambda-core
//!
//! Core contracts for fakelambda, an in-process stand-in for a remote
//! function invocation service.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that only needs to *call* functions, or to provide another backend.
//!
//! # Contracts
//!
//! - [`Serverless`] / [`DynServerless`] - invoke a function by name; shared
//!   by the in-memory backend and any real client
//! - [`FunctionHandler`] / [`DynFunctionHandler`] - a locally registered function
//! - [`Context`] - cancellation and deadline passed to handlers
//! - [`EventErrorHook`] - observes failures of fire-and-forget invocations
//! - [`InvokeInput`] / [`InvokeOutput`] - request and response shapes
//!
//! # Error Types
//!
//! - [`InvokeError`] - validation failures and handler errors
//! - [`BoxError`] - opaque handler error

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod handler;
mod hook;
mod invoke;
mod serverless;

// Re-exports
pub use context::Context;
pub use error::{BoxError, InvokeError};
pub use handler::{DynFunctionHandler, FunctionHandler, SharedHandler};
pub use hook::EventErrorHook;
pub use invoke::{InvocationType, InvokeInput, InvokeOptions, InvokeOutput, STATUS_ACCEPTED};
pub use serverless::{DynServerless, InvokeResult, Serverless};
pub use tokio_util::sync::CancellationToken;
