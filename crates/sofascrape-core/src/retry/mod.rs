//! Retry strategies.
//!
//! - [`BackoffStrategy`] - how long to wait between attempts and when to stop
//! - [`FixedBackoff`] - constant delay with optional jitter
//!
//! A strategy with `max_retries() == n` runs an operation at most `n + 1` times.

mod fixed;
mod strategy;

pub use fixed::{FixedBackoff, FixedBackoffBuilder};
pub use strategy::BackoffStrategy;
