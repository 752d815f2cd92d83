//! # fakelambda-std
//!
//! Standard implementations for fakelambda.
//!
//! This crate provides:
//! - **In-memory backend**: [`Fake`], [`FakeBuilder`], [`with_function`], [`with_error_hook`]
//! - **Registry**: [`FunctionRegistry`]
//! - **Standard hooks**: Logging
//! - **JSON adapter**: `json_handler` (feature `json`)
//! - **Testing doubles**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use fakelambda_core;

// Modules
pub mod fake;
pub mod hooks;
#[cfg(feature = "json")]
pub mod json;
pub mod testing;

mod spawn;

pub use fake::{Fake, FakeBuilder, FakeOption, FunctionRegistry, with_error_hook, with_function};
