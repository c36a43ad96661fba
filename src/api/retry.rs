//! Refresh-and-retry policy for authenticated calls.
//!
//! A call that fails with 401/403 triggers exactly one session refresh and,
//! if that works, exactly one replay of the call. Anything else (network
//! errors, 5xx, bad bodies) is surfaced as is.
//!
//! ```text
//! Fresh ──(401/403)──→ RetriedOnce ──(any failure)──→ Failed
//!   │
//!   └──(other error)──→ Failed
//! ```

use std::future::Future;

use async_trait::async_trait;

use super::error::ApiError;

/// Something able to renew the server-held session.
#[async_trait]
pub trait SessionRefresher: Send + Sync {
    /// Try to renew the session. Returns `true` when a session is active again.
    async fn refresh_session(&self) -> bool;
}

/// Where a call stands in the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// Nothing retried yet.
    Fresh,
    /// The session was refreshed and the call replayed once.
    RetriedOnce,
    /// No further attempts.
    Failed,
}

impl RetryState {
    /// Next state after a failed attempt with `error`.
    pub fn advance(self, error: &ApiError) -> RetryState {
        match self {
            RetryState::Fresh if error.is_auth_failure() => RetryState::RetriedOnce,
            _ => RetryState::Failed,
        }
    }
}

/// Run `request`, refreshing the session and replaying once on 401/403.
///
/// On any failure after the first attempt the ORIGINAL error is returned,
/// never the refresh error or the replay error.
pub async fn with_auth_retry<T, F, Fut>(refresher: &dyn SessionRefresher, mut request: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let original = match request().await {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    let state = RetryState::Fresh.advance(&original);
    if state != RetryState::RetriedOnce {
        return Err(original);
    }

    tracing::debug!(error = %original, "Authorization failed, refreshing session");
    if !refresher.refresh_session().await {
        tracing::warn!("Session refresh failed, giving up on request");
        return Err(original);
    }

    match request().await {
        Ok(value) => Ok(value),
        Err(retry_err) => {
            tracing::warn!(error = %retry_err, "Request failed again after session refresh");
            Err(original)
        }
    }
}
