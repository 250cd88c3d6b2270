//! Configuration for the sofascrape client

use http::HeaderMap;
use std::time::Duration;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay between retries, in seconds.
pub const DEFAULT_RETRY_DELAY_SECS: f64 = 1.0;

/// Configuration for the sofascrape client.
///
/// Passed explicitly to [`Client::from_config`](crate::Client::from_config);
/// nothing is read from global state, so several differently configured
/// clients can live in one process.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API
    pub base_url: Option<String>,

    /// Whether session bootstrapping should run without a visible browser.
    ///
    /// Passed through to the configured
    /// [`SessionBootstrap`](crate::http::SessionBootstrap), if any.
    pub headless: bool,

    /// Per-request timeout
    pub timeout: Duration,

    /// User-Agent header value
    pub user_agent: Option<String>,

    /// Maximum number of retries after the first attempt
    pub max_retries: u32,

    /// Delay between retries, in seconds
    pub delay_between_retries: f64,

    /// Upper bound of a random extra wait added to each retry delay
    pub retry_jitter: Duration,

    /// Also retry 5xx and 429 responses, not only network failures
    pub retry_http_errors: bool,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,

    /// Client-side rate limiting
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            headless: true,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: None,
            max_retries: DEFAULT_MAX_RETRIES,
            delay_between_retries: DEFAULT_RETRY_DELAY_SECS,
            retry_jitter: Duration::ZERO,
            retry_http_errors: false,
            default_headers: HeaderMap::new(),
            proxy: None,
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// Timeout in whole milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// Load configuration from environment variables (and a `.env` file if present).
    ///
    /// This will look for:
    /// - `SOFASCRAPE_BASE_URL` for the API base URL
    /// - `SOFASCRAPE_HEADLESS` (`true`/`false`/`1`/`0`)
    /// - `SOFASCRAPE_TIMEOUT_MS` for request timeout (in milliseconds)
    /// - `SOFASCRAPE_USER_AGENT`
    /// - `SOFASCRAPE_MAX_RETRIES` for maximum retry attempts
    /// - `SOFASCRAPE_RETRY_DELAY_SECS` for the delay between retries (float seconds)
    /// - `SOFASCRAPE_PROXY` for HTTP proxy
    ///
    /// Unparseable numeric values are ignored and the default is kept.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_url) = env::var("SOFASCRAPE_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(headless) = env::var("SOFASCRAPE_HEADLESS")
            && let Some(headless) = parse_bool(&headless)
        {
            config.headless = headless;
        }

        if let Ok(timeout) = env::var("SOFASCRAPE_TIMEOUT_MS")
            && let Ok(timeout_ms) = timeout.parse::<u64>()
        {
            config.timeout = Duration::from_millis(timeout_ms);
        }

        if let Ok(user_agent) = env::var("SOFASCRAPE_USER_AGENT") {
            config.user_agent = Some(user_agent);
        }

        if let Ok(max_retries) = env::var("SOFASCRAPE_MAX_RETRIES")
            && let Ok(max_retries) = max_retries.parse::<u32>()
        {
            config.max_retries = max_retries;
        }

        if let Ok(delay) = env::var("SOFASCRAPE_RETRY_DELAY_SECS")
            && let Ok(delay) = delay.parse::<f64>()
            && delay.is_finite()
            && delay >= 0.0
        {
            config.delay_between_retries = delay;
        }

        if let Ok(proxy) = env::var("SOFASCRAPE_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// Scalar fields are taken from `other` whenever they differ from the defaults.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        let defaults = ClientConfig::default();

        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.headless != defaults.headless {
            self.headless = other.headless;
        }
        if other.timeout != defaults.timeout {
            self.timeout = other.timeout;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        if other.max_retries != defaults.max_retries {
            self.max_retries = other.max_retries;
        }
        if other.delay_between_retries != defaults.delay_between_retries {
            self.delay_between_retries = other.delay_between_retries;
        }
        if other.retry_jitter != defaults.retry_jitter {
            self.retry_jitter = other.retry_jitter;
        }
        if other.retry_http_errors {
            self.retry_http_errors = true;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.rate_limit.is_some() {
            self.rate_limit = other.rate_limit;
        }

        self
    }
}

#[cfg(feature = "env")]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration for client-side rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests per second
    pub requests_per_second: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 5,
        }
    }
}
