//! HTTP transport layer
//!
//! A [`Transport`] turns one [`ApiRequest`] into exactly one GET request and
//! returns the decoded JSON payload. Retries are applied above this layer by
//! the [`Client`](crate::Client).

pub use reqwest_transport::{ReqwestTransport, ReqwestTransportBuilder};
pub use request::{ApiRequest, segment};
pub use session::SessionBootstrap;
pub use transport::Transport;

mod reqwest_transport;
mod request;
mod session;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
