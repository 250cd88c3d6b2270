//! Main client implementation for the SofaScore API

use std::sync::Arc;
use std::time::Duration;

use sofascrape_core::retry::{BackoffStrategy, FixedBackoff};
use tracing::warn;

use crate::{
    config::{ClientConfig, RateLimitConfig},
    error::{Error, Result},
    http::{ApiRequest, ReqwestTransport, SessionBootstrap, Transport},
    resources::{Events, Meta, Odds, Players, Sport, Teams, Tournaments, Venues},
    response::ApiResponse,
};

/// Client for the SofaScore API.
///
/// Each call issues one GET (plus retries, if configured) and returns the
/// decoded payload as an [`ApiResponse`]. Cloning is cheap; clones share the
/// transport and its connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use sofascrape::Client;
///
/// # async fn example() -> sofascrape::Result<()> {
/// let client = Client::new()?;
/// let lineups = client.events().lineups(11_352_380).await?;
/// lineups.save_json("lineups.json")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// Transport that performs the GET requests
    transport: Arc<dyn Transport>,
    /// Fixed-delay retry policy
    retry: FixedBackoff,
    /// Whether 5xx/429 responses are retried too
    retry_http_errors: bool,
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// With the `env` feature, `SOFASCRAPE_*` variables (and `.env`) are
    /// applied on top of the defaults.
    pub fn new() -> Result<Self> {
        #[cfg(feature = "env")]
        let config = ClientConfig::from_env()?;
        #[cfg(not(feature = "env"))]
        let config = ClientConfig::default();

        Self::from_config(config)
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL, proxy or a default header is invalid,
    /// or the HTTP client cannot be initialized.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::from_parts(config, None)
    }

    /// Create a client around a custom transport.
    ///
    /// Only the retry settings of `config` are used; everything that shapes
    /// the request itself belongs to the transport.
    pub fn from_transport(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                retry: backoff_from(config),
                retry_http_errors: config.retry_http_errors,
            }),
        }
    }

    fn from_parts(
        config: ClientConfig,
        bootstrap: Option<Arc<dyn SessionBootstrap>>,
    ) -> Result<Self> {
        let mut builder = ReqwestTransport::builder()
            .timeout(config.timeout)
            .headers(config.default_headers.clone());

        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(proxy.clone());
        }
        if let Some(rate_limit) = config.rate_limit {
            builder = builder.rate_limit(rate_limit);
        }
        if let Some(bootstrap) = bootstrap {
            builder = builder.session_bootstrap(bootstrap, config.headless);
        }

        let transport: Arc<dyn Transport> = Arc::new(builder.build()?);
        Ok(Self::from_transport(transport, &config))
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.inner.transport.base_url()
    }

    /// Name of the underlying transport (for debugging).
    pub fn transport_name(&self) -> &'static str {
        self.inner.transport.transport_name()
    }

    /// Retry policy in effect.
    pub fn retry_policy(&self) -> &FixedBackoff {
        &self.inner.retry
    }

    /// GET an arbitrary API path, e.g. `/api/v1/event/11352380/graph`.
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.fetch(ApiRequest::new(path)).await
    }

    /// Send a request, retrying as configured.
    ///
    /// Network failures are retried up to `max_retries` times with a fixed
    /// delay; 5xx/429 responses only when `retry_http_errors` is set. Other
    /// errors are returned immediately.
    pub async fn fetch(&self, request: ApiRequest) -> Result<ApiResponse> {
        let transport = &self.inner.transport;
        let retry_http_errors = self.inner.retry_http_errors;

        let result = self
            .inner
            .retry
            .execute_when(
                || transport.fetch(&request),
                |err: &Error| should_retry(err, retry_http_errors),
            )
            .await;

        match result {
            Ok(payload) => Ok(ApiResponse::new(payload)),
            Err(err) => {
                warn!(
                    path = %request,
                    kind = ?err.kind(),
                    error = %err,
                    "request failed"
                );
                Err(err)
            }
        }
    }

    /// Sport-wide listings: categories, schedules, live events.
    pub fn sport(&self) -> Sport<'_> {
        Sport::new(self)
    }

    /// Single-event endpoints: details, incidents, lineups, graphs.
    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    /// Team endpoints.
    pub fn teams(&self) -> Teams<'_> {
        Teams::new(self)
    }

    /// Unique-tournament and season endpoints.
    pub fn tournaments(&self) -> Tournaments<'_> {
        Tournaments::new(self)
    }

    /// Betting odds endpoints.
    pub fn odds(&self) -> Odds<'_> {
        Odds::new(self)
    }

    /// Player endpoints.
    pub fn players(&self) -> Players<'_> {
        Players::new(self)
    }

    /// Venue endpoints.
    pub fn venues(&self) -> Venues<'_> {
        Venues::new(self)
    }

    /// Countries, configuration and other metadata.
    pub fn meta(&self) -> Meta<'_> {
        Meta::new(self)
    }
}

fn backoff_from(config: &ClientConfig) -> FixedBackoff {
    FixedBackoff::builder()
        .max_retries(config.max_retries)
        .delay_secs(config.delay_between_retries)
        .jitter(config.retry_jitter)
        .build()
}

fn should_retry(err: &Error, retry_http_errors: bool) -> bool {
    err.is_retryable() || (retry_http_errors && err.is_transient_status())
}

/// Builder for creating a configured [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    bootstrap: Option<Arc<dyn SessionBootstrap>>,
}

impl ClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Run session bootstrapping headless (default) or with a visible browser.
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the per-request timeout in milliseconds.
    pub fn timeout_ms(self, timeout_ms: u64) -> Self {
        self.timeout(Duration::from_millis(timeout_ms))
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Set the number of retries after the first attempt.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the delay between retries, in seconds.
    pub fn delay_between_retries(mut self, secs: f64) -> Self {
        self.config.delay_between_retries = secs;
        self
    }

    /// Add up to `jitter` of random wait to each retry delay.
    pub fn retry_jitter(mut self, jitter: Duration) -> Self {
        self.config.retry_jitter = jitter;
        self
    }

    /// Also retry 5xx and 429 responses.
    pub fn retry_http_errors(mut self, retry: bool) -> Self {
        self.config.retry_http_errors = retry;
        self
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Limit outgoing requests per second. Zero is rejected by [`build`](Self::build).
    pub fn rate_limit(mut self, requests_per_second: u32) -> Self {
        self.config.rate_limit = Some(RateLimitConfig {
            requests_per_second,
        });
        self
    }

    /// Attach session headers (cookies) obtained by `bootstrap`.
    pub fn session_bootstrap(mut self, bootstrap: Arc<dyn SessionBootstrap>) -> Self {
        self.bootstrap = Some(bootstrap);
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_parts(self.config, self.bootstrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Transport that replays a script of results and counts calls.
    #[derive(Debug)]
    struct ScriptedTransport {
        script: Mutex<VecDeque<Result<Value>>>,
        calls: AtomicU32,
        paths: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn new(script: Vec<Result<Value>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                calls: AtomicU32::new(0),
                paths: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn fetch(&self, request: &ApiRequest) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.paths.lock().unwrap().push(request.to_string());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Connection("script exhausted".into())))
        }

        fn transport_name(&self) -> &'static str {
            "scripted"
        }

        fn base_url(&self) -> &str {
            "https://scripted.invalid/"
        }
    }

    fn config(max_retries: u32) -> ClientConfig {
        ClientConfig {
            max_retries,
            delay_between_retries: 0.5,
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_two_network_failures() {
        let transport = ScriptedTransport::new(vec![
            Err(Error::Connection("reset".into())),
            Err(Error::Timeout(Duration::from_secs(30))),
            Ok(json!({"event": {"id": 1}})),
        ]);
        let client = Client::from_transport(transport.clone(), &config(3));

        let response = client.get("/api/v1/event/1").await.unwrap();

        assert_eq!(transport.calls(), 3);
        assert_eq!(response.pointer("/event/id"), Some(&json!(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_retry_budget() {
        let transport = ScriptedTransport::new(vec![]);
        let client = Client::from_transport(transport.clone(), &config(2));

        let err = client.get("/api/v1/event/1").await.unwrap_err();

        assert!(matches!(err, Error::Connection(_)));
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_zero_retries_is_single_attempt() {
        let transport = ScriptedTransport::new(vec![Err(Error::Connection("down".into()))]);
        let client = Client::from_transport(transport.clone(), &config(0));

        assert!(client.get("/x").await.is_err());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_http_and_decode_errors_are_not_retried_by_default() {
        let transport = ScriptedTransport::new(vec![Err(Error::from_response(503, ""))]);
        let client = Client::from_transport(transport.clone(), &config(3));
        let err = client.get("/x").await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(transport.calls(), 1);

        let transport = ScriptedTransport::new(vec![Err(Error::Decode("eof".into()))]);
        let client = Client::from_transport(transport.clone(), &config(3));
        assert!(matches!(client.get("/x").await, Err(Error::Decode(_))));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_http_errors_opt_in() {
        let transport = ScriptedTransport::new(vec![
            Err(Error::from_response(503, "")),
            Err(Error::from_response(429, "")),
            Ok(json!([])),
        ]);
        let config = ClientConfig {
            retry_http_errors: true,
            ..config(3)
        };
        let client = Client::from_transport(transport.clone(), &config);

        assert!(client.get("/x").await.is_ok());
        assert_eq!(transport.calls(), 3);

        // 404 is not transient even when HTTP retries are enabled
        let transport = ScriptedTransport::new(vec![Err(Error::from_response(404, ""))]);
        let client = Client::from_transport(transport.clone(), &config);
        assert!(client.get("/x").await.is_err());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_resources_build_paths() {
        let transport = ScriptedTransport::new(vec![Ok(json!({})), Ok(json!({}))]);
        let client = Client::from_transport(transport.clone(), &config(0));

        let lineups = client.events().lineups(11352380).await.unwrap();
        let standings = client
            .tournaments()
            .standings(17, 61627, "total")
            .await
            .unwrap();
        assert_eq!(lineups.endpoint(), Some("events_lineups"));
        assert_eq!(standings.endpoint(), Some("tournaments_standings"));

        let paths = transport.paths.lock().unwrap().clone();
        assert_eq!(
            paths,
            vec![
                "/api/v1/event/11352380/lineups",
                "/api/v1/unique-tournament/17/season/61627/standings/total",
            ]
        );
    }

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .base_url("https://example.com")
            .timeout(Duration::from_secs(30))
            .max_retries(5)
            .delay_between_retries(2.0)
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://example.com/");
        assert_eq!(client.transport_name(), "reqwest");
        assert_eq!(client.retry_policy().max_retries(), 5);
        assert_eq!(client.retry_policy().delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_client_builder_rejects_bad_input() {
        assert!(matches!(
            Client::builder().base_url("ftp://example.com").build(),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            Client::builder().default_header("bad header", "x"),
            Err(Error::InvalidHeaderName(_))
        ));
        assert!(matches!(
            Client::builder().rate_limit(0).build(),
            Err(Error::InvalidParameter { name: "rate_limit", .. })
        ));
    }

    #[test]
    fn test_client_clone_shares_transport() {
        let client = Client::builder().build().unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.inner, &clone.inner));
    }
}
