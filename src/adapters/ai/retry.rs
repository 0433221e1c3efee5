//! Retry with exponential backoff for provider calls.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use crate::ports::AIError;

/// Backoff before retry number `attempt` (0-based): 1s, 2s, 4s, ...
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt.min(6))
}

/// Runs `operation` until it succeeds, fails with a non-retryable error or
/// `max_retries` retries have been spent. With `max_retries == 0` the
/// operation runs exactly once.
pub(crate) async fn with_retries<T, F, Fut>(
    provider: &str,
    max_retries: u32,
    mut operation: F,
) -> Result<T, AIError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AIError>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < max_retries => {
                let delay = backoff_delay(attempt);
                warn!(
                    provider,
                    attempt = attempt + 1,
                    max_retries,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "Retrying AI request"
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(8));
    }

    #[tokio::test]
    async fn zero_retries_runs_once() {
        let calls = AtomicU32::new(0);
        let result: Result<(), AIError> = with_retries("test", 0, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AIError::network("down")) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_retryable_errors_stop_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<(), AIError> = with_retries("test", 3, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AIError::AuthenticationFailed) }
        })
        .await;

        assert!(matches!(result, Err(AIError::AuthenticationFailed)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_success() {
        let calls = AtomicU32::new(0);
        let result = with_retries("test", 2, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(AIError::unavailable("busy"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
