//! Shared test utilities for splunk-query integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the mock Splunk endpoints a search walks through.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `SPLUNK_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SPLUNK_VARS: [&str; 15] = [
    "SPLUNK_URL",
    "SPLUNK_BASE_URL",
    "SPLUNK_TOKEN",
    "SPLUNK_API_TOKEN",
    "SPLUNK_USER",
    "SPLUNK_USERNAME",
    "SPLUNK_PASSWORD",
    "SPLUNK_MGMT_PORT",
    "SPLUNK_SKIP_TLS_VERIFY",
    "SPLUNK_TIMEOUT",
    "SPLUNK_SESSION_LOGIN",
    "SPLUNK_POLL_ATTEMPTS",
    "SPLUNK_POLL_INTERVAL_MS",
    "SPLUNK_RESULTS_COUNT",
    "RUST_LOG",
];

/// Returns a hermetic `splunk-query` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Host `SPLUNK_*` variables are cleared.
/// - `SPLUNK_TOKEN` is set to a dummy value and polling is fast.
pub fn splunk_query_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-query");

    cmd.env("DOTENV_DISABLED", "1");
    for var in SPLUNK_VARS {
        cmd.env_remove(var);
    }
    cmd.env("SPLUNK_TOKEN", "test-token")
        .env("SPLUNK_POLL_INTERVAL_MS", "10")
        .write_stdin("");

    cmd
}

/// Returns a hermetic command pointed at `server`.
#[allow(dead_code)]
pub fn splunk_query_cmd_for(server: &MockServer) -> Command {
    let mut cmd = splunk_query_cmd();
    cmd.env("SPLUNK_URL", server.uri());
    cmd
}

/// Mount submit (`S1`), a DONE status and `results` as the results body.
#[allow(dead_code)]
pub async fn mount_search(server: &MockServer, results: Value) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"sid": "S1"})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "entry": [{"content": {"dispatchState": "DONE", "isDone": true}}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results))
        .mount(server)
        .await;
}
