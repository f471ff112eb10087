use std::sync::Arc;
use std::time::Duration;

use atlas::core::controller::Controller;
use atlas::core::state::{EMPTY_DATASET_ERROR, LOAD_FAILED_ERROR};
use atlas::countries::rest::ALL_FIELDS;
use atlas::countries::{CountrySource, RestCountriesSource, SourceError};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn country_json(common: &str, cca3: &str, capital: &str) -> Value {
    json!({
        "name": { "common": common, "official": format!("Republic of {common}") },
        "capital": [capital],
        "population": 1_000_000,
        "flags": {
            "png": format!("https://flags.test/{cca3}.png"),
            "svg": format!("https://flags.test/{cca3}.svg"),
            "alt": null
        },
        "cca2": &cca3[..2],
        "cca3": cca3,
        "region": "Testland",
        "subregion": "North Testland",
        "area": 1234.5,
        "languages": { "tst": "Testish" }
    })
}

fn numbered(n: usize) -> Value {
    Value::Array(
        (1..=n)
            .map(|i| country_json(&format!("Country {i:02}"), &format!("N{i:02}"), "Capital"))
            .collect(),
    )
}

fn source_for(server: &MockServer) -> RestCountriesSource {
    RestCountriesSource::new(Some(server.uri()), Duration::from_secs(5))
        .expect("client should build")
}

async fn mount_all(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param("fields", ALL_FIELDS.join(",")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// RestCountriesSource
// ============================================================================

#[tokio::test]
async fn test_fetch_all_requests_field_projection() {
    let server = MockServer::start().await;
    mount_all(
        &server,
        json!([
            country_json("Peru", "PER", "Lima"),
            country_json("Chile", "CHL", "Santiago")
        ]),
    )
    .await;

    let countries = source_for(&server).fetch_all().await.unwrap();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name.common, "Peru");
    assert_eq!(countries[0].primary_capital(), Some("Lima"));
    assert_eq!(countries[1].cca3, "CHL");
    // Not part of the projection: defaults to empty
    assert!(countries[0].timezones.is_empty());
}

#[tokio::test]
async fn test_fetch_all_http_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_all().await.unwrap_err();
    assert_eq!(
        err,
        SourceError::Api {
            status: 503,
            message: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_fetch_all_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_search_encodes_query_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/name/united%20states"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([country_json(
                "United States",
                "USA",
                "Washington, D.C."
            )])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let countries = source_for(&server)
        .search_by_name("united states")
        .await
        .unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].cca3, "USA");
}

#[tokio::test]
async fn test_search_not_found_is_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/name/zzz"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"status": 404, "message": "Not Found"})),
        )
        .mount(&server)
        .await;

    let countries = source_for(&server).search_by_name("zzz").await.unwrap();
    assert!(countries.is_empty());
}

#[tokio::test]
async fn test_search_server_error_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/name/peru"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source_for(&server).search_by_name("peru").await.unwrap_err();
    assert!(matches!(err, SourceError::Api { status: 500, .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let source =
        RestCountriesSource::new(Some("http://127.0.0.1:9".to_string()), Duration::from_secs(2))
            .unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_slow_response_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(numbered(3))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let source = RestCountriesSource::new(Some(server.uri()), Duration::from_millis(200)).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Network(_)), "got {err:?}");

    // The failed load clears the busy flag instead of hanging
    let mut ctl = Controller::new(Arc::new(source), Duration::ZERO);
    ctl.load_all().await;
    assert!(!ctl.state().loading);
    assert_eq!(ctl.state().error.as_deref(), Some(LOAD_FAILED_ERROR));
}

// ============================================================================
// Controller over HTTP
// ============================================================================

fn controller_for(server: &MockServer) -> Controller {
    Controller::new(Arc::new(source_for(server)), Duration::ZERO)
}

#[tokio::test]
async fn test_controller_pages_through_http_dataset() {
    let server = MockServer::start().await;
    mount_all(&server, numbered(45)).await;

    let mut ctl = controller_for(&server);
    ctl.load_all().await;
    assert_eq!(ctl.state().displayed.len(), 20);
    assert!(ctl.state().has_more);

    ctl.load_more().await;
    ctl.load_more().await;
    assert_eq!(ctl.state().displayed.len(), 45);
    assert!(!ctl.state().has_more);
    assert_eq!(ctl.state().displayed[44].name.common, "Country 45");
}

#[tokio::test]
async fn test_controller_empty_dataset_is_error() {
    let server = MockServer::start().await;
    mount_all(&server, json!([])).await;

    let mut ctl = controller_for(&server);
    ctl.load_all().await;
    assert_eq!(ctl.state().error.as_deref(), Some(EMPTY_DATASET_ERROR));
    assert!(!ctl.state().loading);
}

#[tokio::test]
async fn test_controller_failed_load_then_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_all(&server, numbered(3)).await;

    let mut ctl = controller_for(&server);
    ctl.load_all().await;
    assert_eq!(ctl.state().error.as_deref(), Some(LOAD_FAILED_ERROR));
    assert!(ctl.state().displayed.is_empty());

    ctl.retry().await;
    assert!(ctl.state().error.is_none());
    assert_eq!(ctl.state().displayed.len(), 3);
}

#[tokio::test]
async fn test_controller_search_round_trip() {
    let server = MockServer::start().await;
    mount_all(&server, numbered(30)).await;
    Mock::given(method("GET"))
        .and(path("/name/peru"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([country_json("Peru", "PER", "Lima")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/name/oops"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut ctl = controller_for(&server);
    ctl.load_all().await;

    ctl.search("peru").await;
    let app = ctl.state();
    assert!(app.is_searching);
    assert!(!app.has_more);
    assert_eq!(app.displayed.len(), 1);
    assert_eq!(app.summary(), "Showing 1 country for \"peru\"");

    // A failed search shows nothing, but is not an error
    ctl.search("oops").await;
    assert!(ctl.state().displayed.is_empty());
    assert!(ctl.state().error.is_none());

    // Clearing restores the first browse page without refetching
    ctl.search("").await;
    assert!(!ctl.state().is_searching);
    assert_eq!(ctl.state().displayed.len(), 20);
    assert!(ctl.state().has_more);
}
