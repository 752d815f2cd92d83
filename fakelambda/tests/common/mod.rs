#![allow(dead_code)]

use fakelambda::{BoxError, Bytes, Context, Fake, FunctionHandler, with_function};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Test Errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
#[error("order {0} rejected")]
pub struct RejectedOrder(pub String);

// ============================================================================
// Test Handlers
// ============================================================================

pub async fn reverse(_ctx: Context, payload: Bytes) -> Result<Bytes, BoxError> {
    Ok(payload.iter().rev().copied().collect())
}

pub async fn reject(_ctx: Context, payload: Bytes) -> Result<Bytes, RejectedOrder> {
    Err(RejectedOrder(String::from_utf8_lossy(&payload).into_owned()))
}

/// Replies with whether the context it received was already cancelled.
pub async fn report_cancelled(ctx: Context, _payload: Bytes) -> Result<Bytes, BoxError> {
    let flag: &'static [u8] = if ctx.is_cancelled() { b"cancelled" } else { b"live" };
    Ok(Bytes::from_static(flag))
}

/// Waits for cancellation, then fails.
pub async fn until_cancelled(ctx: Context, _payload: Bytes) -> Result<Bytes, BoxError> {
    ctx.done().await;
    Err("cancelled".into())
}

pub struct CountingHandler {
    pub calls: Arc<AtomicUsize>,
    pub reply: &'static str,
}

impl FunctionHandler for CountingHandler {
    async fn call(&self, _ctx: Context, _payload: Bytes) -> Result<Bytes, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Bytes::from_static(self.reply.as_bytes()))
    }
}

pub fn reverse_fake() -> Fake {
    Fake::new([with_function("f", reverse)])
}
