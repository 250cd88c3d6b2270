#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the sofascrape crates.
//!
//! Currently this is the retry layer: a [`BackoffStrategy`](retry::BackoffStrategy)
//! trait and a [`FixedBackoff`](retry::FixedBackoff) implementation that waits a
//! constant delay (plus optional random jitter) between attempts.
//!
//! # Examples
//!
//! ```rust
//! use sofascrape_core::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backoff = FixedBackoff::builder()
//!     .max_retries(3)
//!     .delay(Duration::from_millis(100))
//!     .build();
//!
//! let result = backoff
//!     .execute_when(|| async { Ok::<_, std::io::Error>(42) }, |_err| true)
//!     .await?;
//! assert_eq!(result, 42);
//! # Ok(())
//! # }
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
pub mod prelude {
    pub use crate::retry::{BackoffStrategy, FixedBackoff, FixedBackoffBuilder};
}
