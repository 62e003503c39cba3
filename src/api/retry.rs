//! Rate-limit backoff shared by the search and delete clients.

use std::time::Duration;

use crate::error::api::ApiError;

/// Factor applied to Discord's `retry_after` before retrying.
pub const RATE_LIMIT_MULTIPLIER: f64 = 2.0;

/// How rate-limited requests are retried.
///
/// Discord's `retry_after` always expires eventually, so the default retries without a
/// ceiling. `--max-attempts` sets one for callers that prefer to give up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of requests per call including the first, `None` for unbounded.
    pub max_attempts: Option<u32>,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: None,
            multiplier: RATE_LIMIT_MULTIPLIER,
        }
    }
}

impl RetryPolicy {
    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..Self::default()
        }
    }

    /// Time to wait after a rate-limit response carrying `retry_after` seconds.
    pub fn backoff(&self, retry_after: f64) -> Duration {
        Duration::try_from_secs_f64(retry_after.max(0.0) * self.multiplier)
            .unwrap_or(Duration::ZERO)
    }

    /// Sleeps before the next attempt after being rate limited.
    ///
    /// # Arguments
    /// - `attempts` - Requests already sent for this call
    /// - `retry_after` - Seconds from the rate-limit response
    ///
    /// # Returns
    /// - `Ok(())` - Slept for the backoff, the request may be re-sent
    /// - `Err(ApiError::RateLimitExhausted)` - The ceiling has been reached
    pub async fn wait(&self, attempts: u32, retry_after: f64) -> Result<(), ApiError> {
        if self.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(ApiError::RateLimitExhausted {
                attempts,
                retry_after,
            });
        }

        let backoff = self.backoff(retry_after);
        tracing::warn!(
            "Rate limited by Discord API, retrying in {:.2}s (attempt {})",
            backoff.as_secs_f64(),
            attempts
        );
        tokio::time::sleep(backoff).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the backoff doubles `retry_after`.
    ///
    /// Expected: 1.5s becomes 3s, negative values wait nothing
    #[test]
    fn backoff_doubles_retry_after() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.backoff(1.5), Duration::from_secs(3));
        assert_eq!(policy.backoff(0.25), Duration::from_millis(500));
        assert_eq!(policy.backoff(-1.0), Duration::ZERO);
    }

    /// Tests that waiting sleeps for the full backoff.
    ///
    /// Expected: at least 2 × retry_after of (virtual) time passes
    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_backoff() {
        let start = tokio::time::Instant::now();

        RetryPolicy::default().wait(1, 1.5).await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    /// Tests the retry ceiling.
    ///
    /// Expected: Ok below the ceiling, RateLimitExhausted once reached
    #[tokio::test(start_paused = true)]
    async fn bounded_policy_gives_up() {
        let policy = RetryPolicy::bounded(2);

        assert!(policy.wait(1, 0.1).await.is_ok());
        assert!(matches!(
            policy.wait(2, 0.1).await,
            Err(ApiError::RateLimitExhausted { attempts: 2, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn unbounded_policy_never_gives_up() {
        let policy = RetryPolicy::default();
        assert!(policy.wait(10_000, 0.0).await.is_ok());
    }
}
