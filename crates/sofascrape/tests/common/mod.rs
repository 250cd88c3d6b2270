//! Common test utilities and helpers

use std::path::Path;

use sofascrape::{Client, ClientBuilder};
use wiremock::MockServer;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> serde_json::Value {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    });
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Fixture '{}' is not JSON: {}", name, e))
}

/// Builder pointed at the mock server, without retry delays
#[allow(dead_code)]
pub fn builder_for(server: &MockServer) -> ClientBuilder {
    Client::builder()
        .base_url(server.uri())
        .delay_between_retries(0.0)
        .user_agent("sofascrape-test/1.0")
}

/// Client pointed at the mock server with `max_retries` retries
#[allow(dead_code)]
pub fn client_for(server: &MockServer, max_retries: u32) -> Client {
    builder_for(server)
        .max_retries(max_retries)
        .build()
        .expect("client should build")
}
