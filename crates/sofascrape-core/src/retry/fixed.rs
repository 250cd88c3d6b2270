//! Fixed-delay backoff with optional jitter.

use super::strategy::BackoffStrategy;
use std::time::Duration;

/// Waits the same delay before every retry.
///
/// When `jitter` is non-zero a uniformly random extra wait in `[0, jitter)` is
/// added to each delay, so clients started together do not retry in lockstep.
///
/// ```rust
/// use sofascrape_core::retry::{BackoffStrategy, FixedBackoff};
/// use std::time::Duration;
///
/// let backoff = FixedBackoff::builder()
///     .max_retries(3)
///     .delay(Duration::from_secs(1))
///     .build();
///
/// assert_eq!(backoff.max_retries(), 3);
/// assert_eq!(backoff.next_delay(0), Some(Duration::from_secs(1)));
/// assert_eq!(backoff.next_delay(2), Some(Duration::from_secs(1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedBackoff {
    max_retries: u32,
    delay: Duration,
    jitter: Duration,
}

impl FixedBackoff {
    /// Create a new builder.
    pub fn builder() -> FixedBackoffBuilder {
        FixedBackoffBuilder::default()
    }

    /// A strategy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// Base delay between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Upper bound of the random extra delay.
    pub fn jitter(&self) -> Duration {
        self.jitter
    }
}

impl Default for FixedBackoff {
    /// Defaults: 3 retries, 1s delay, no jitter.
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_secs(1),
            jitter: Duration::ZERO,
        }
    }
}

impl BackoffStrategy for FixedBackoff {
    fn next_delay(&self, _attempt: u32) -> Option<Duration> {
        let extra = if self.jitter.is_zero() {
            Duration::ZERO
        } else {
            self.jitter.mul_f64(rand::random::<f64>())
        };

        let total = self.delay.saturating_add(extra);
        if total.is_zero() { None } else { Some(total) }
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// Builder for [`FixedBackoff`].
#[derive(Debug, Default)]
pub struct FixedBackoffBuilder {
    max_retries: Option<u32>,
    delay: Option<Duration>,
    jitter: Option<Duration>,
}

impl FixedBackoffBuilder {
    /// Maximum number of retries after the first attempt. Default: 3
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Delay between attempts. Default: 1s
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delay between attempts in (fractional) seconds.
    ///
    /// Negative or non-finite values are treated as zero.
    pub fn delay_secs(self, secs: f64) -> Self {
        self.delay(secs_to_duration(secs))
    }

    /// Upper bound of the random extra delay. Default: none
    pub fn jitter(mut self, jitter: Duration) -> Self {
        self.jitter = Some(jitter);
        self
    }

    /// Build the strategy.
    pub fn build(self) -> FixedBackoff {
        let defaults = FixedBackoff::default();
        FixedBackoff {
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            delay: self.delay.unwrap_or(defaults.delay),
            jitter: self.jitter.unwrap_or(defaults.jitter),
        }
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}
