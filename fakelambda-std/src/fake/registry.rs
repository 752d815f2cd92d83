//! Name-to-handler registry.

use fakelambda_core::{FunctionHandler, SharedHandler};
use std::{collections::HashMap, sync::Arc};

/// Maps function names to handlers.
///
/// Inserting an existing name replaces the previous handler.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, SharedHandler>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, returning the handler it replaced.
    pub fn insert<H: FunctionHandler>(
        &mut self,
        name: impl Into<String>,
        handler: H,
    ) -> Option<SharedHandler> {
        self.insert_shared(name, Arc::new(handler))
    }

    /// Register an already shared handler under `name`.
    pub fn insert_shared(
        &mut self,
        name: impl Into<String>,
        handler: SharedHandler,
    ) -> Option<SharedHandler> {
        self.functions.insert(name.into(), handler)
    }

    /// Look up the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&SharedHandler> {
        self.functions.get(name)
    }

    /// Whether a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
