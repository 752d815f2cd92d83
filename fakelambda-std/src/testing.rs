//! Testing utilities for fakelambda.
//!
//! Event invocations give the caller no completion signal, so the doubles
//! here signal out-of-band instead: each records what it saw and wakes
//! anyone waiting on it.
//!
//! # Features
//!
//! - [`ReverseHandler`]: Replies with the payload reversed
//! - [`FailingHandler`]: Always fails with a fixed message
//! - [`RecordingHandler`]: Records payloads and replies with a fixed output
//! - [`GatedHandler`]: Blocks until released, to prove a caller did not wait
//! - [`RecordingErrorHook`]: Collects event invocation errors

use bytes::Bytes;
use fakelambda_core::{BoxError, Context, EventErrorHook, FunctionHandler};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::{Notify, Semaphore};

// ============================================================================
// Reverse Handler
// ============================================================================

/// A handler that echoes its payload reversed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseHandler;

impl FunctionHandler for ReverseHandler {
    async fn call(&self, _ctx: Context, payload: Bytes) -> Result<Bytes, BoxError> {
        let mut reversed = payload.to_vec();
        reversed.reverse();
        Ok(Bytes::from(reversed))
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with the same message.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FunctionHandler for FailingHandler {
    async fn call(&self, _ctx: Context, _payload: Bytes) -> Result<Bytes, BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every payload it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new("ok");
/// let fake = Fake::new([with_function("audit", recorder.clone())]);
///
/// fake.invoke(Some(InvokeInput::new("audit").invocation_type("Event"))).await?;
/// recorder.wait_for_calls(1).await;
/// ```
#[derive(Clone)]
pub struct RecordingHandler {
    payloads: Arc<Mutex<Vec<Bytes>>>,
    notify: Arc<Notify>,
    reply: Bytes,
}

impl RecordingHandler {
    /// Create a recorder that replies with `reply`.
    pub fn new(reply: impl Into<Bytes>) -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
            notify: Arc::new(Notify::new()),
            reply: reply.into(),
        }
    }

    /// Payloads received so far, in call order.
    pub fn payloads(&self) -> Vec<Bytes> {
        self.payloads.lock().unwrap().clone()
    }

    /// Number of calls so far.
    pub fn count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    /// Wait until at least `n` calls were recorded.
    pub async fn wait_for_calls(&self, n: usize) {
        loop {
            let notified = self.notify.notified();
            if self.count() >= n {
                return;
            }
            notified.await;
        }
    }
}

impl FunctionHandler for RecordingHandler {
    async fn call(&self, _ctx: Context, payload: Bytes) -> Result<Bytes, BoxError> {
        self.payloads.lock().unwrap().push(payload);
        self.notify.notify_waiters();
        Ok(self.reply.clone())
    }
}

// ============================================================================
// Gated Handler
// ============================================================================

/// A handler that does not finish until [`GatedHandler::open`] is called.
///
/// Each `open` releases exactly one call.
#[derive(Clone)]
pub struct GatedHandler {
    gate: Arc<Semaphore>,
    started: Arc<AtomicUsize>,
    finished: Arc<AtomicUsize>,
    notify: Arc<Notify>,
}

impl GatedHandler {
    /// Create a closed gate.
    pub fn new() -> Self {
        Self {
            gate: Arc::new(Semaphore::new(0)),
            started: Arc::new(AtomicUsize::new(0)),
            finished: Arc::new(AtomicUsize::new(0)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Release one pending or future call.
    pub fn open(&self) {
        self.gate.add_permits(1);
    }

    /// Calls that have started.
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Calls that have finished.
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    /// Wait until at least `n` calls have finished.
    pub async fn wait_finished(&self, n: usize) {
        loop {
            let notified = self.notify.notified();
            if self.finished() >= n {
                return;
            }
            notified.await;
        }
    }
}

impl Default for GatedHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionHandler for GatedHandler {
    async fn call(&self, _ctx: Context, payload: Bytes) -> Result<Bytes, BoxError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.gate.acquire().await?.forget();
        self.finished.fetch_add(1, Ordering::SeqCst);
        self.notify.notify_waiters();
        Ok(payload)
    }
}

// ============================================================================
// Recording Error Hook
// ============================================================================

/// An [`EventErrorHook`] that collects `(function, message)` pairs.
#[derive(Clone, Default)]
pub struct RecordingErrorHook {
    errors: Arc<Mutex<Vec<(String, String)>>>,
    notify: Arc<Notify>,
}

impl RecordingErrorHook {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors observed so far.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().unwrap().clone()
    }

    /// Wait until at least `n` errors were observed.
    pub async fn wait_for_errors(&self, n: usize) {
        loop {
            let notified = self.notify.notified();
            if self.errors.lock().unwrap().len() >= n {
                return;
            }
            notified.await;
        }
    }
}

impl EventErrorHook for RecordingErrorHook {
    fn on_error(&self, function: &str, error: &BoxError) {
        self.errors
            .lock()
            .unwrap()
            .push((function.to_string(), error.to_string()));
        self.notify.notify_waiters();
    }
}
