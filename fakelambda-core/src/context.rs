//! # Invocation Context
//!
//! Carries cancellation and an optional deadline from the caller into a
//! function handler.
//!
//! A [`Context`] is only meaningful on the synchronous path: event
//! invocations always run with [`Context::background()`], so nothing the
//! caller does afterwards reaches them. Whether a handler honours
//! cancellation is up to the handler.
//!
//! ```rust,ignore
//! let ctx = Context::background().with_timeout(Duration::from_secs(2));
//! let out = fake.invoke_with_context(ctx, Some(input), InvokeOptions::default()).await?;
//! ```

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline scope passed to every handler call.
///
/// Cloning is cheap; clones share the same cancellation state.
#[derive(Clone, Debug, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context driven by an existing cancellation token.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// Set a deadline relative to now. A timeout too large to represent
    /// leaves the current deadline, if any, unchanged.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Derive a child context: cancelling the parent cancels the child, not
    /// the other way round. The deadline is inherited.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancel this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. `None` without a deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Whether the context was cancelled or its deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Resolves once the context is cancelled or its deadline is reached.
    ///
    /// Pends forever on a background context.
    pub async fn done(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => {}
                    _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// The underlying cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_never_cancelled() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert!(ctx.deadline().is_none());
        assert!(ctx.remaining().is_none());
    }

    #[test]
    fn test_cancel_reaches_children_only_downwards() {
        let parent = Context::background();
        let child = parent.child();

        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());

        let other = parent.child();
        parent.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_earlier_deadline_wins() {
        let now = Instant::now();
        let ctx = Context::background()
            .with_deadline(now + Duration::from_secs(5))
            .with_deadline(now + Duration::from_secs(60));
        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(5)));
    }

    #[test]
    fn test_elapsed_deadline_counts_as_cancelled() {
        let ctx = Context::background().with_deadline(Instant::now());
        assert!(ctx.is_cancelled());
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn test_unrepresentable_timeout_keeps_deadline() {
        let ctx = Context::background().with_timeout(Duration::MAX);
        assert!(ctx.deadline().is_none());
        assert!(!ctx.is_cancelled());

        let bounded = Context::background().with_timeout(Duration::from_secs(30));
        let deadline = bounded.deadline();
        assert_eq!(bounded.with_timeout(Duration::MAX).deadline(), deadline);
    }

    #[test]
    fn test_external_token_drives_context() {
        let token = CancellationToken::new();
        let ctx = Context::with_cancellation(token.clone());
        assert!(!ctx.is_cancelled());

        token.cancel();
        assert!(ctx.is_cancelled());
        assert!(ctx.token().is_cancelled());
    }

    #[tokio::test]
    async fn test_done_resolves_on_cancel() {
        let ctx = Context::background();
        let waiter = ctx.clone();
        ctx.cancel();
        waiter.done().await;
        assert!(waiter.is_cancelled());
    }

    #[tokio::test]
    async fn test_done_resolves_on_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_millis(10));
        ctx.done().await;
        assert!(ctx.is_cancelled());
    }
}
