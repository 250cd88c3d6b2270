//! The backoff strategy trait.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// A strategy for retrying failed operations.
///
/// Implementations decide how long to wait between attempts and how many
/// retries are allowed. Which errors are worth retrying is decided by the
/// caller through the predicate passed to [`execute_when`](Self::execute_when),
/// so the same strategy can serve callers with different error types.
///
/// # Examples
///
/// ```rust
/// use sofascrape_core::retry::{BackoffStrategy, FixedBackoff};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backoff = FixedBackoff::builder()
///     .max_retries(3)
///     .delay(Duration::from_millis(10))
///     .build();
///
/// let attempts = Arc::new(AtomicU32::new(0));
/// let value = backoff
///     .execute_when(
///         || {
///             let attempts = Arc::clone(&attempts);
///             async move {
///                 if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
///                     Err(std::io::Error::other("connection reset"))
///                 } else {
///                     Ok(7)
///                 }
///             }
///         },
///         |_err| true,
///     )
///     .await?;
///
/// assert_eq!(value, 7);
/// assert_eq!(attempts.load(Ordering::SeqCst), 3);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Delay before the retry that follows failed attempt `attempt` (0-indexed).
    ///
    /// `None` means "retry immediately".
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Maximum number of retries after the initial attempt.
    fn max_retries(&self) -> u32;

    /// Run `operation` until it succeeds, `should_retry` rejects the error, or
    /// the retry budget is spent. The last error is returned unchanged.
    async fn execute_when<F, Fut, T, E, P>(&self, operation: F, should_retry: P) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Send,
        P: Fn(&E) -> bool + Send + Sync,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) if !should_retry(&err) => return Err(err),
                Err(err) if attempt >= self.max_retries() => return Err(err),
                Err(_) => {
                    let delay = self.next_delay(attempt);

                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries(),
                        delay_ms = delay.map(|d| d.as_millis() as u64).unwrap_or(0),
                        "attempt failed, retrying"
                    );

                    if let Some(delay) = delay {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}
