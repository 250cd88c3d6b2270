//! Tests for the blocking session facade
#![cfg(feature = "blocking")]

use serde_json::json;
use sofascrape::blocking::Session;
use sofascrape::{ClientConfig, Error};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The mock server runs on its own multi-threaded runtime so the session's
/// current-thread runtime can block freely.
fn start_server() -> (tokio::runtime::Runtime, MockServer) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/event/1/h2h"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "teamDuel": {"homeWins": 3, "awayWins": 1, "draws": 2}
            })))
            .mount(&server)
            .await;
        server
    });
    (runtime, server)
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        max_retries: 0,
        ..ClientConfig::with_base_url(server.uri())
    }
}

#[test]
fn test_get_blocks_until_response() {
    let (_runtime, server) = start_server();
    let session = Session::open(config_for(&server)).unwrap();

    let h2h = session.get("/api/v1/event/1/h2h").unwrap();
    assert_eq!(h2h.pointer("/teamDuel/draws"), Some(&json!(2)));

    session.close();
}

#[test]
fn test_call_runs_resource_methods() {
    let (_runtime, server) = start_server();
    let session = Session::open(config_for(&server)).unwrap();

    let h2h = session
        .call(|client| async move { client.events().h2h(1).await })
        .unwrap();
    assert_eq!(h2h.len().unwrap(), 1);
}

#[test]
fn test_scoped_session_surfaces_http_errors() {
    let (_runtime, server) = start_server();

    let result = Session::scoped(config_for(&server), |session| {
        session.get("/api/v1/event/2/h2h")
    });

    assert!(matches!(result, Err(Error::Http { status: 404, .. })));
}
