//! In-memory invocation backend.
//!
//! [`Fake`] keeps a [`FunctionRegistry`] of local handlers and answers
//! [`Serverless`] calls the way the remote service would:
//!
//! - request/response invocations await the handler and return its output
//!   or its error, unchanged;
//! - `Event` invocations start the handler in the background with a fresh
//!   [`Context::background()`] and return `202` straight away.
//!
//! # Construction
//!
//! Either from an ordered list of options:
//!
//! ```rust,ignore
//! let fake = Fake::new([
//!     with_function("resize", resize),
//!     with_function("notify", notify),
//! ]);
//! ```
//!
//! or with the fluent [`FakeBuilder`]:
//!
//! ```rust,ignore
//! let fake = Fake::builder()
//!     .function("resize", resize)
//!     .error_hook(LoggingHook)
//!     .build();
//! ```
//!
//! The registry cannot change once built.

pub mod registry;

pub use registry::FunctionRegistry;

use crate::spawn;
use bytes::Bytes;
use fakelambda_core::{
    Context, DynFunctionHandler, EventErrorHook, FunctionHandler, InvocationType, InvokeError,
    InvokeInput, InvokeOptions, InvokeOutput, InvokeResult, Serverless, SharedHandler,
};
use std::sync::Arc;

/// A deferred change applied to a [`FakeBuilder`].
pub struct FakeOption(Box<dyn FnOnce(&mut FakeBuilder) + Send>);

impl FakeOption {
    /// Wrap a builder mutation.
    pub fn new(apply: impl FnOnce(&mut FakeBuilder) + Send + 'static) -> Self {
        Self(Box::new(apply))
    }

    fn apply(self, builder: &mut FakeBuilder) {
        (self.0)(builder)
    }
}

/// Register `handler` under `name`. A later registration of the same name wins.
pub fn with_function<H: FunctionHandler>(name: impl Into<String>, handler: H) -> FakeOption {
    let name = name.into();
    FakeOption::new(move |builder| {
        builder.registry.insert(name, handler);
    })
}

/// Observe errors of event invocations with `hook`.
pub fn with_error_hook<H: EventErrorHook>(hook: H) -> FakeOption {
    FakeOption::new(move |builder| {
        builder.error_hook = Some(Arc::new(hook));
    })
}

/// Builder for [`Fake`]. Calls are applied in order.
#[derive(Default)]
pub struct FakeBuilder {
    registry: FunctionRegistry,
    error_hook: Option<Arc<dyn EventErrorHook>>,
}

impl FakeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function.
    pub fn function<H: FunctionHandler>(mut self, name: impl Into<String>, handler: H) -> Self {
        self.registry.insert(name, handler);
        self
    }

    /// Register an already shared handler.
    pub fn shared_function(mut self, name: impl Into<String>, handler: SharedHandler) -> Self {
        self.registry.insert_shared(name, handler);
        self
    }

    /// Apply an option.
    pub fn option(mut self, option: FakeOption) -> Self {
        option.apply(&mut self);
        self
    }

    /// Install the event error hook, replacing any previous one.
    pub fn error_hook<H: EventErrorHook>(mut self, hook: H) -> Self {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    /// Build the fake.
    pub fn build(self) -> Fake {
        Fake {
            inner: Arc::new(Inner {
                registry: self.registry,
                error_hook: self.error_hook,
            }),
        }
    }
}

struct Inner {
    registry: FunctionRegistry,
    error_hook: Option<Arc<dyn EventErrorHook>>,
}

/// In-memory [`Serverless`] backend. Cloning shares the same registry.
#[derive(Clone)]
pub struct Fake {
    inner: Arc<Inner>,
}

/// A request that passed validation.
struct Invocation {
    function: String,
    handler: SharedHandler,
    payload: Bytes,
    event: bool,
}

impl Fake {
    /// Build a fake by applying `options` in order.
    pub fn new(options: impl IntoIterator<Item = FakeOption>) -> Self {
        options
            .into_iter()
            .fold(FakeBuilder::new(), FakeBuilder::option)
            .build()
    }

    /// Start a fluent builder.
    pub fn builder() -> FakeBuilder {
        FakeBuilder::new()
    }

    /// The function registry.
    pub fn registry(&self) -> &FunctionRegistry {
        &self.inner.registry
    }

    /// Whether a function is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.registry.contains(name)
    }

    /// Registered function names, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        self.inner.registry.names()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.inner.registry.len()
    }

    /// Whether no function is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.registry.is_empty()
    }

    /// Check a request against the registry.
    ///
    /// Order: missing request, missing name, unknown name.
    fn validate_input(&self, input: Option<InvokeInput>) -> Result<Invocation, InvokeError> {
        let InvokeInput {
            function_name,
            payload,
            invocation_type,
            ..
        } = input.ok_or(InvokeError::NoInput)?;
        let function = function_name.ok_or(InvokeError::NoFunctionName)?;
        let handler = self
            .inner
            .registry
            .get(&function)
            .cloned()
            .ok_or_else(|| InvokeError::FunctionNotFound(function.clone()))?;

        Ok(Invocation {
            function,
            handler,
            payload: payload.unwrap_or_default(),
            event: matches!(invocation_type, Some(InvocationType::Event)),
        })
    }

    fn dispatch_event(&self, invocation: Invocation) -> InvokeOutput {
        let Invocation {
            function,
            handler,
            payload,
            ..
        } = invocation;
        let error_hook = self.inner.error_hook.clone();

        spawn::detach(async move {
            if let Err(err) = handler.call_dyn(Context::background(), payload).await {
                if let Some(hook) = error_hook {
                    hook.on_error(&function, &err);
                }
            }
        });

        InvokeOutput::accepted()
    }

    async fn dispatch_sync(
        ctx: Context,
        invocation: Invocation,
        options: InvokeOptions,
    ) -> InvokeResult {
        let call = invocation.handler.call_dyn(ctx, invocation.payload);

        #[cfg(feature = "tracing")]
        let call = tracing::Instrument::instrument(
            call,
            tracing::debug_span!(
                "invoke",
                function = %invocation.function,
                trace_id = options.trace_id.as_deref().unwrap_or_default()
            ),
        );
        #[cfg(not(feature = "tracing"))]
        let _ = options;

        let payload = call.await.map_err(InvokeError::Handler)?;
        Ok(InvokeOutput::with_payload(payload))
    }
}

impl Serverless for Fake {
    async fn invoke_with_context(
        &self,
        ctx: Context,
        input: Option<InvokeInput>,
        options: InvokeOptions,
    ) -> InvokeResult {
        let invocation = match self.validate_input(input) {
            Ok(invocation) => invocation,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "Rejected invocation");
                return Err(err);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            function = %invocation.function,
            invocation = if invocation.event { "event" } else { "sync" },
            "Dispatching function"
        );

        if invocation.event {
            Ok(self.dispatch_event(invocation))
        } else {
            Self::dispatch_sync(ctx, invocation, options).await
        }
    }
}

impl std::fmt::Debug for Fake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fake")
            .field("registry", &self.inner.registry)
            .field("error_hook", &self.inner.error_hook.is_some())
            .finish()
    }
}
