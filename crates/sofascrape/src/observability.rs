//! Structured logging helpers
//!
//! All requests and exports are logged through this module so field names
//! stay consistent (`path`, `status`, `elapsed_ms`, `body_size`, ...).

use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Transport that sends the request
    pub transport: &'static str,
    /// Request path (with query)
    pub path: String,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(transport: &'static str, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
        }
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            transport = self.transport,
            path = %self.path,
            "Sending GET request"
        );
    }

    /// Log a decoded 2xx response
    pub fn log_success(&self, status: u16, body_size: usize, elapsed: Duration) {
        debug!(
            transport = self.transport,
            path = %self.path,
            status,
            body_size,
            elapsed_ms = elapsed.as_millis() as u64,
            "GET request succeeded"
        );
    }

    /// Log a failed attempt
    pub fn log_error(&self, error: &crate::Error, elapsed: Duration) {
        warn!(
            transport = self.transport,
            path = %self.path,
            status = error.status(),
            kind = ?error.kind(),
            elapsed_ms = elapsed.as_millis() as u64,
            error = %error,
            "GET request failed"
        );
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Log a finished export
pub fn log_export(format: &str, path: &Path, bytes: u64) {
    info!(
        format,
        path = %path.display(),
        bytes,
        "Export written"
    );
}

/// Install a global `tracing` subscriber driven by `RUST_LOG`.
///
/// Defaults to `sofascrape=info` when `RUST_LOG` is unset. Calling this more
/// than once is harmless; later calls are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sofascrape=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
