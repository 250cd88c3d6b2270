//! `reqwest`-backed transport
//!
//! Sends GET requests to the SofaScore API with the configured base URL,
//! headers, user agent, timeout and optional rate limit.

use super::{ApiRequest, SessionBootstrap, Transport};
use crate::{
    config::RateLimitConfig,
    error::{Error, Result},
    observability::{RequestMetadata, RequestTimer},
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde_json::Value;
use std::{num::NonZeroU32, sync::Arc, time::Duration};
use tokio::sync::OnceCell;
use url::Url;

/// HTTP transport built on `reqwest`.
///
/// Cloning is cheap; clones share the connection pool, the rate limiter and
/// the bootstrapped session headers.
///
/// # Example
///
/// ```rust,no_run
/// use sofascrape::http::ReqwestTransport;
/// use std::time::Duration;
///
/// let transport = ReqwestTransport::builder()
///     .base_url("https://www.sofascore.com")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    pub(crate) inner: Arc<TransportInner>,
}

pub(crate) struct TransportInner {
    /// HTTP client for making requests
    pub(crate) http_client: reqwest::Client,
    /// Base URL for the API
    pub(crate) base_url: Url,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Custom headers to include with every request
    pub(crate) default_headers: http::HeaderMap,
    /// Optional client-side rate limiter
    rate_limiter: Option<DefaultDirectRateLimiter>,
    /// Optional session bootstrap and its cached result
    bootstrap: Option<Arc<dyn SessionBootstrap>>,
    headless: bool,
    session_headers: OnceCell<http::HeaderMap>,
}

impl std::fmt::Debug for TransportInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportInner")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .field("rate_limited", &self.rate_limiter.is_some())
            .field("bootstrap", &self.bootstrap)
            .field("headless", &self.headless)
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Create a new builder for configuring the transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Resolve a request against the base URL.
    ///
    /// The request path is appended to the base URL's own path, so a base of
    /// `https://proxy.example/sofa` keeps its `/sofa` prefix.
    pub(crate) fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, request.path())).map_err(|e| {
            Error::InvalidUrl(format!(
                "Failed to construct URL from path '{}': {}",
                request.path(),
                e
            ))
        })?;

        if !request.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query_pairs());
        }

        Ok(url)
    }

    async fn session_headers(&self) -> Result<Option<&http::HeaderMap>> {
        let Some(bootstrap) = &self.inner.bootstrap else {
            return Ok(None);
        };

        let headers = self
            .inner
            .session_headers
            .get_or_try_init(|| async {
                bootstrap
                    .session_headers(self.inner.headless)
                    .await
                    .map_err(|e| match e {
                        Error::Session(_) => e,
                        other => Error::Session(other.to_string()),
                    })
            })
            .await?;

        Ok(Some(headers))
    }

    fn classify(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.inner.timeout)
        } else {
            Error::from(e)
        }
    }

    async fn send(&self, request: &ApiRequest) -> Result<(u16, Vec<u8>)> {
        let url = self.url_for(request)?;

        if let Some(limiter) = &self.inner.rate_limiter {
            limiter.until_ready().await;
        }

        let mut builder = self
            .inner
            .http_client
            .get(url)
            .timeout(self.inner.timeout)
            .header(http::header::ACCEPT, "application/json")
            .headers(self.inner.default_headers.clone());

        if let Some(session) = self.session_headers().await? {
            builder = builder.headers(session.clone());
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, request: &ApiRequest) -> Result<Value> {
        let metadata = RequestMetadata::new(self.transport_name(), request.to_string());
        metadata.log_request();
        let timer = RequestTimer::start();

        let result = self.send(request).await.and_then(|(status, body)| {
            if !(200..300).contains(&status) {
                return Err(Error::from_response(status, &String::from_utf8_lossy(&body)));
            }

            let value = serde_json::from_slice::<Value>(&body)
                .map_err(|e| Error::Decode(e.to_string()))?;
            metadata.log_success(status, body.len(), timer.elapsed());
            Ok(value)
        });

        if let Err(error) = &result {
            metadata.log_error(error, timer.elapsed());
        }

        result
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }

    fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

/// Builder for creating a [`ReqwestTransport`].
///
/// # Example
///
/// ```rust,no_run
/// use sofascrape::http::ReqwestTransport;
///
/// let transport = ReqwestTransport::builder()
///     .user_agent("my-scraper/1.0")
///     .header("accept-language", "en")
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct ReqwestTransportBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    proxy: Option<String>,
    default_headers: http::HeaderMap,
    rate_limit: Option<RateLimitConfig>,
    bootstrap: Option<Arc<dyn SessionBootstrap>>,
    headless: bool,
}

impl ReqwestTransportBuilder {
    /// Set the base URL for the API.
    ///
    /// Defaults to `https://www.sofascore.com`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Limit outgoing requests per second.
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    /// Attach a session bootstrap whose headers are sent with every request.
    pub fn session_bootstrap(mut self, bootstrap: Arc<dyn SessionBootstrap>, headless: bool) -> Self {
        self.bootstrap = Some(bootstrap);
        self.headless = headless;
        self
    }

    /// Add a custom header to include with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<http::HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<http::HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.default_headers.insert(key, value);
        Ok(self)
    }

    /// Add several already-validated headers.
    pub fn headers(mut self, headers: http::HeaderMap) -> Self {
        for (key, value) in headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is empty, unparseable, or not http/https
    /// - The proxy URL is invalid
    /// - HTTP client creation fails
    pub fn build(self) -> Result<ReqwestTransport> {
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_millis(crate::config::DEFAULT_TIMEOUT_MS));
        let base_url = parse_base_url(self.base_url.as_deref())?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("sofascrape-rust/{}", crate::VERSION));

        let mut http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent);

        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::HttpClient(format!("Invalid proxy '{}': {}", proxy, e)))?;
            http_client = http_client.proxy(proxy);
        }

        let http_client = http_client
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let rate_limiter = match self.rate_limit {
            Some(config) => {
                let rate = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
                    Error::InvalidParameter {
                        name: "rate_limit",
                        reason: "requests per second must be at least 1".into(),
                    }
                })?;
                Some(RateLimiter::direct(Quota::per_second(rate)))
            }
            None => None,
        };

        let inner = Arc::new(TransportInner {
            http_client,
            base_url,
            timeout,
            default_headers: self.default_headers,
            rate_limiter,
            bootstrap: self.bootstrap,
            headless: self.headless,
            session_headers: OnceCell::new(),
        });

        Ok(ReqwestTransport { inner })
    }
}

fn parse_base_url(base_url: Option<&str>) -> Result<Url> {
    let base_url = base_url.unwrap_or(crate::DEFAULT_BASE_URL);

    if base_url.trim().is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let url: Url = base_url
        .trim()
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
            scheme
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let transport = ReqwestTransport::builder().build().unwrap();

        assert_eq!(transport.transport_name(), "reqwest");
        assert_eq!(transport.base_url(), "https://www.sofascore.com/");
        assert_eq!(transport.inner.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_with_custom_config() {
        let transport = ReqwestTransport::builder()
            .base_url("https://custom.example")
            .timeout(Duration::from_millis(1500))
            .user_agent("CustomBot/1.0")
            .build()
            .unwrap();

        assert_eq!(transport.base_url(), "https://custom.example/");
        assert_eq!(transport.inner.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_builder_with_custom_headers() {
        let transport = ReqwestTransport::builder()
            .header("X-Requested-With", "sofascrape")
            .unwrap()
            .build()
            .unwrap();

        assert!(
            transport
                .inner
                .default_headers
                .contains_key("x-requested-with")
        );
    }

    #[test]
    fn test_builder_rejects_bad_header() {
        let result = ReqwestTransport::builder().header("bad header", "x");
        assert!(matches!(result, Err(Error::InvalidHeaderName(_))));

        let result = ReqwestTransport::builder().header("x-ok", "line\nbreak");
        assert!(matches!(result, Err(Error::InvalidHeaderValue(_))));
    }

    #[test]
    fn test_builder_rejects_bad_base_urls() {
        let result = ReqwestTransport::builder().base_url("   ").build();
        assert!(matches!(result, Err(Error::InvalidUrl(msg)) if msg.contains("empty")));

        let result = ReqwestTransport::builder().base_url("ftp://files.example").build();
        assert!(matches!(result, Err(Error::InvalidUrl(msg)) if msg.contains("ftp")));

        let result = ReqwestTransport::builder().base_url("not a url").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_url_for_keeps_base_path_and_query() {
        let transport = ReqwestTransport::builder()
            .base_url("https://proxy.example/sofa/")
            .build()
            .unwrap();

        let url = transport
            .url_for(&ApiRequest::new("/api/v1/event/42").query("lang", "en gb"))
            .unwrap();

        assert_eq!(url.as_str(), "https://proxy.example/sofa/api/v1/event/42?lang=en+gb");
    }

    #[test]
    fn test_zero_rate_limit_is_rejected() {
        let err = ReqwestTransport::builder()
            .rate_limit(RateLimitConfig {
                requests_per_second: 0,
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "rate_limit", .. }));

        let transport = ReqwestTransport::builder()
            .rate_limit(RateLimitConfig {
                requests_per_second: 1,
            })
            .build();
        assert!(transport.is_ok());
    }
}
