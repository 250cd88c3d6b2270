//! End-to-end export tests: fetch from a mock server, write JSON and CSV files

mod common;

use common::{client_for, load_response_fixture};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sofascrape::{ApiResponse, Error, ExportFormat};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn scheduled_events() -> ApiResponse {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sport/football/scheduled-events/2024-05-19"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_response_fixture("scheduled_events")),
        )
        .mount(&server)
        .await;

    client_for(&server, 0)
        .get("/api/v1/sport/football/scheduled-events/2024-05-19")
        .await
        .unwrap()
}

#[tokio::test]
async fn test_events_export_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let events = scheduled_events().await.select("events").unwrap();

    let path = events
        .save(ExportFormat::Csv, dir.path(), "scheduled events: 2024/05/19")
        .unwrap();
    assert_eq!(path, dir.path().join("scheduled events 20240519.csv"));

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,slug,homeTeam,awayTeam,homeScore,awayScore,status,startTimestamp,note"
    );
    assert!(lines[1].starts_with("12436870,arsenal-everton,\"{\"\"id\"\":42,"));
    assert!(lines[1].ends_with(",1716130800,"));
    assert!(lines[2].contains(",,,"));
    assert!(lines[2].ends_with(",\"Kick-off moved, \"\"TBC\"\"\""));
}

#[tokio::test]
async fn test_full_payload_export_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let response = scheduled_events().await;

    let path = response
        .save_json(dir.path().join("exports").join("schedule.json"))
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \"events\": [\n        {\n            \"id\": 12436870,"));
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(&reparsed, response.data());
}

#[tokio::test]
async fn test_csv_of_mapping_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let response = scheduled_events().await;

    let err = response
        .save(ExportFormat::Csv, dir.path(), "schedule")
        .unwrap_err();

    assert!(matches!(err, Error::NotTabular(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    // the wrapper is still usable after a failed export
    assert_eq!(response.len().unwrap(), 1);
}

#[test]
fn test_in_memory_exports_match_files() {
    let dir = tempfile::tempdir().unwrap();
    let response = ApiResponse::new(json!([{"a": 1, "b": 2}, {"a": 3}]));

    for format in [ExportFormat::Json, ExportFormat::Csv] {
        let path = response.save(format, dir.path(), "rows").unwrap();
        let on_disk = std::fs::read_to_string(path).unwrap();
        assert_eq!(on_disk, format.render(&response).unwrap());
    }
}

#[tokio::test]
async fn test_endpoint_response_saved_under_endpoint_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/event/11352380/lineups"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_response_fixture("event_lineups")),
        )
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let lineups = client_for(&server, 0)
        .events()
        .lineups(11352380)
        .await
        .unwrap();
    let path = lineups
        .save_as_endpoint(ExportFormat::Json, dir.path())
        .unwrap();

    assert_eq!(path, dir.path().join("events_lineups.json"));
    let reparsed: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(&reparsed, lineups.data());
}
