//! Bounded retry with exponential backoff for transient server errors.
//!
//! Only HTTP 500/502/503/504 are retried. Connection errors, malformed
//! bodies and 4xx responses are never retried; they surface immediately as a
//! single failure for the stage that issued the request.

use std::time::Duration;

use super::domain::LookupError;

/// Retry policy: total attempt budget and exponential backoff parameters.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Backoff before the first retry.
    pub initial_backoff: Duration,
    /// Multiplier applied to the backoff after each retry.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Backoff duration before retry number `retry` (0-based).
    pub fn backoff_for(&self, retry: u32) -> Duration {
        self.initial_backoff
            .mul_f64(self.backoff_multiplier.powi(retry as i32))
    }
}

/// Whether a status code counts as a transient server error.
pub fn is_transient(status: u16) -> bool {
    matches!(status, 500 | 502 | 503 | 504)
}

/// Anything with an HTTP status code, so the retry loop can be exercised
/// without a live server.
pub trait StatusCarrier {
    fn status_code(&self) -> u16;
}

impl StatusCarrier for reqwest::Response {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

/// Run `attempt_fn` until it yields a non-transient response or the attempt
/// budget is exhausted. The final response is returned as-is; turning an
/// error status into a [`LookupError`] is the caller's job.
pub async fn execute<T, F, Fut>(policy: &RetryPolicy, mut attempt_fn: F) -> Result<T, LookupError>
where
    T: StatusCarrier,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LookupError>>,
{
    let mut retries = 0;
    loop {
        let response = attempt_fn().await?;
        let status = response.status_code();
        if !is_transient(status) || retries + 1 >= policy.max_attempts {
            return Ok(response);
        }

        let backoff = policy.backoff_for(retries);
        tracing::debug!(status, retry = retries + 1, ?backoff, "transient server error, retrying");
        tokio::time::sleep(backoff).await;
        retries += 1;
    }
}
