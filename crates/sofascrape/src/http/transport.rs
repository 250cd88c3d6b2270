//! Transport trait for abstracting the HTTP backend

use super::ApiRequest;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Performs single GET requests against the API.
///
/// Implementations issue exactly one request per call and never retry; the
/// [`Client`](crate::Client) wraps calls in its retry policy. This keeps the
/// seam small enough to swap in a recording or scripted transport in tests.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Fetch `request` and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`Error::Connection`](crate::Error::Connection) /
    ///   [`Error::Timeout`](crate::Error::Timeout) for network failures
    /// - [`Error::Http`](crate::Error::Http) for non-2xx responses
    /// - [`Error::Decode`](crate::Error::Decode) when the body is not JSON
    async fn fetch(&self, request: &ApiRequest) -> Result<Value>;

    /// Transport name for debugging/logging.
    fn transport_name(&self) -> &'static str;

    /// Base URL requests are resolved against.
    fn base_url(&self) -> &str;
}
