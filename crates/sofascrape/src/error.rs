//! Error types for the sofascrape client
//!
//! Every failure surfaces as a distinct [`Error`] variant. Variants are grouped
//! into coarse [`ErrorKind`]s so callers can decide what to do (retry, fall
//! back to another export format, give up) without matching every variant.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a sofascrape error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sofascrape client.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection error (DNS, refused connection, reset, ...).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timed out.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// The API answered with a non-2xx status.
    #[error("HTTP error (status {status}): {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Error message, taken from the body when available
        message: String,
    },

    /// The response body is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// Indexing a mapping payload by a key it does not contain.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Indexing a sequence payload past its end.
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Length of the sequence
        len: usize,
    },

    /// Indexing a payload whose shape does not support that kind of index.
    #[error("Payload of type {0} is not indexable this way")]
    NotIndexable(&'static str),

    /// Asking for the length of a scalar payload.
    #[error("Payload of type {0} has no length")]
    NotSized(&'static str),

    /// CSV export on a payload that is not a sequence of mappings.
    #[error("Payload is not tabular: {0}")]
    NotTabular(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while exporting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid base URL or endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A path parameter that cannot be placed in a URL segment.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Session bootstrap (cookies / headers) failed.
    #[error("Session error: {0}")]
    Session(String),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection failures and timeouts.
    Network,
    /// Non-2xx responses.
    Http,
    /// Undecodable response bodies.
    Decode,
    /// Indexing and length operations on unsupported payload shapes.
    Access,
    /// Export failures: non-tabular payloads and I/O.
    Export,
    /// Invalid configuration or parameters.
    Config,
}

impl Error {
    /// Create an HTTP error from a response status and body.
    ///
    /// SofaScore reports failures as `{"error": {"code": 404, "message": "Not Found"}}`;
    /// when the body has that shape its message is used, otherwise the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|e| e.error.message.or(e.error.reason))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    http::StatusCode::from_u16(status)
                        .ok()
                        .and_then(|s| s.canonical_reason())
                        .unwrap_or("unknown status")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });

        Error::Http { status, message }
    }

    /// The coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Connection(_) | Error::Timeout(_) => ErrorKind::Network,
            Error::Http { .. } => ErrorKind::Http,
            Error::Decode(_) => ErrorKind::Decode,
            Error::KeyNotFound(_)
            | Error::IndexOutOfRange { .. }
            | Error::NotIndexable(_)
            | Error::NotSized(_) => ErrorKind::Access,
            Error::NotTabular(_) | Error::Io(_) | Error::Serialization(_) => ErrorKind::Export,
            Error::InvalidUrl(_)
            | Error::InvalidParameter { .. }
            | Error::InvalidHeaderName(_)
            | Error::InvalidHeaderValue(_)
            | Error::HttpClient(_)
            | Error::Session(_) => ErrorKind::Config,
            Error::WithContext { source, .. } => source.kind(),
        }
    }

    /// HTTP status code, if this is an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::WithContext { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Check if this error is a transient network failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Connection(_) | Error::Timeout(_) => true,
            Error::WithContext { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// Check if this is a server-side (5xx) or rate-limit (429) HTTP error.
    ///
    /// These are only retried when the client is configured with
    /// `retry_http_errors`.
    pub fn is_transient_status(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500 || s == 429)
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Decode(e.to_string())
        } else if e.is_builder() {
            Error::HttpClient(e.to_string())
        } else {
            Error::Connection(e.to_string())
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetails,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDetails {
    message: Option<String>,
    reason: Option<String>,
}
