//! Cancellation-aware execution context for provider operations.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{ProviderError, Result};

/// Carries the caller's cancellation signal and optional deadline.
///
/// Every [`DnsProvider`](crate::DnsProvider) operation takes one. Cancelling
/// the token or passing the deadline aborts whatever the operation is waiting
/// on (the provider lock or the in-flight HTTP request).
///
/// ```rust
/// use std::time::Duration;
/// use cloudns_provider::RequestContext;
///
/// let ctx = RequestContext::new().with_timeout(Duration::from_secs(5));
/// let token = ctx.cancellation_token().clone();
/// // token.cancel() from another task aborts the operation.
/// # drop(token);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `token` as the cancellation signal.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Sets the deadline to `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline. An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |d| d.min(deadline)));
        self
    }

    /// The token that cancels operations run under this context.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the context is already cancelled or past its deadline.
    pub fn is_done(&self) -> bool {
        self.cancel.is_cancelled() || self.deadline.is_some_and(|d| d <= Instant::now())
    }

    /// Drives `fut` to completion unless the context is cancelled or expires first.
    ///
    /// `fut` is dropped on cancellation, which releases anything it holds.
    pub(crate) async fn run<F: Future>(&self, fut: F) -> Result<F::Output> {
        if self.cancel.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ProviderError::Cancelled),
            () = expired => Err(ProviderError::Timeout {
                detail: "context deadline exceeded".to_string(),
            }),
            out = fut => Ok(out),
        }
    }
}
