//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::path::Path;
use std::time::Duration;

#[allow(unused_imports)]
pub use splunk_query_client::{
    CancellationToken, SearchError, SearchOptions, search, search_with_options,
};
#[allow(unused_imports)]
pub use splunk_query_config::{Config, ConfigLoader, Scheme};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{method, path, query_param};

/// Load a JSON fixture from the crate's `fixtures/` directory.
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Loader pointed at `server` with a token and a fast poll policy.
#[allow(dead_code)]
pub fn loader_for(server: &MockServer) -> ConfigLoader {
    ConfigLoader::new()
        .with_base_url(server.uri())
        .with_token("test-token".to_string())
        .with_poll_max_attempts(5)
        .with_poll_interval(Duration::from_millis(10))
}

#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> Config {
    loader_for(server).build().expect("valid test config")
}

/// Options that send the management-port retry over plain HTTP.
#[allow(dead_code)]
pub fn http_retry() -> SearchOptions {
    SearchOptions {
        retry_scheme: Scheme::Http,
    }
}

/// Port of a mock server, for use as the management port.
#[allow(dead_code)]
pub fn port_of(server: &MockServer) -> u16 {
    server.address().port()
}

/// Mount a complete submit, status, results flow for job `S1`.
#[allow(dead_code)]
pub async fn mount_happy_path(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .and(query_param("output_mode", "json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_done.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1/results"))
        .and(query_param("output_mode", "json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/results_fields.json")),
        )
        .mount(server)
        .await;
}
