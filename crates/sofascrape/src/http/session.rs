//! Session bootstrapping hook

use crate::error::Result;
use async_trait::async_trait;
use http::HeaderMap;
use std::fmt;

/// Supplies session headers (typically cookies) that SofaScore expects from a
/// real browser.
///
/// Obtaining them usually means driving a browser, which is outside this
/// crate. Implementors plug that in here; the transport calls
/// [`session_headers`](Self::session_headers) once, before the first request,
/// and attaches the result to every request it sends.
///
/// # Example
///
/// ```rust
/// use sofascrape::http::{HeaderMap, SessionBootstrap};
/// use sofascrape::Result;
///
/// #[derive(Debug)]
/// struct StaticCookie(String);
///
/// #[sofascrape::async_trait]
/// impl SessionBootstrap for StaticCookie {
///     async fn session_headers(&self, _headless: bool) -> Result<HeaderMap> {
///         let mut headers = HeaderMap::new();
///         let value = self.0.parse().map_err(|_| {
///             sofascrape::Error::InvalidHeaderValue(self.0.clone())
///         })?;
///         headers.insert("cookie", value);
///         Ok(headers)
///     }
/// }
/// ```
#[async_trait]
pub trait SessionBootstrap: Send + Sync + fmt::Debug {
    /// Produce headers for the session. `headless` mirrors
    /// [`ClientConfig::headless`](crate::ClientConfig::headless).
    async fn session_headers(&self, headless: bool) -> Result<HeaderMap>;
}
