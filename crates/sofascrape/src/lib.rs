//! # sofascrape
//!
//! Rust client for the SofaScore sports-data API:
//! - One method per endpoint, grouped by entity (events, teams, tournaments, ...)
//! - Uniform [`ApiResponse`] wrapper with indexed access, length and iteration
//! - JSON and CSV export, to strings or atomically written files
//! - Fixed-delay retries, timeouts and optional client-side rate limiting
//! - Pluggable session bootstrapping for cookies obtained from a browser
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sofascrape::Client;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .timeout_ms(10_000)
//!         .max_retries(2)
//!         .build()?;
//!
//!     let date = NaiveDate::from_ymd_opt(2024, 5, 19).unwrap();
//!     let schedule = client.sport().scheduled_events(date).await?;
//!
//!     let events = schedule.select("events")?;
//!     println!("{} events", events.len()?);
//!     events.save_csv("scheduled_events.csv")?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use export::ExportFormat;
pub use response::{ApiResponse, Key};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod observability;
pub mod resources;
pub mod response;

// Synchronous facade (requires blocking feature)
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use sofascrape::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ApiResponse, Client, ClientConfig, Error, ErrorKind, ExportFormat, JsonValue, Key, Result,
        resources::Resource,
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.sofascore.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_BASE_URL, "https://www.sofascore.com");
    }
}
