//! Integration tests for structured exit codes.
//!
//! These tests verify that splunk-query returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{splunk_query_cmd, splunk_query_cmd_for};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_submit(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[test]
fn test_missing_query_returns_exit_code_3() {
    splunk_query_cmd()
        .env("SPLUNK_URL", "http://127.0.0.1:1")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("query is required"));
}

#[test]
fn test_blank_stdin_returns_exit_code_3() {
    splunk_query_cmd()
        .env("SPLUNK_URL", "http://127.0.0.1:1")
        .write_stdin("   \n")
        .assert()
        .code(3);
}

#[test]
fn test_missing_base_url_returns_exit_code_4() {
    splunk_query_cmd()
        .args(["-q", "index=main"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("base URL is required"));
}

#[test]
fn test_connection_refused_returns_exit_code_5() {
    splunk_query_cmd()
        .env("SPLUNK_URL", "http://127.0.0.1:1")
        .args(["-q", "index=main", "--quiet"])
        .assert()
        .code(5);
}

#[tokio::test]
async fn test_unauthorized_returns_exit_code_5() {
    let server = MockServer::start().await;
    mount_submit(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({
            "messages": [{"type": "ERROR", "text": "Unauthorized"}]
        })),
    )
    .await;

    splunk_query_cmd_for(&server)
        .args(["-q", "index=main", "--quiet"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unauthorized"));
}

#[tokio::test]
async fn test_failed_retry_returns_exit_code_6() {
    let server = MockServer::start().await;
    mount_submit(&server, ResponseTemplate::new(600)).await;

    // The retry goes to https on the same port, which a plain-HTTP mock cannot serve.
    splunk_query_cmd_for(&server)
        .env("SPLUNK_MGMT_PORT", server.address().port().to_string())
        .args(["-q", "index=main", "--quiet"])
        .assert()
        .code(6);
}

#[tokio::test]
async fn test_no_sid_returns_exit_code_7() {
    let server = MockServer::start().await;
    mount_submit(&server, ResponseTemplate::new(201).set_body_json(json!({}))).await;

    splunk_query_cmd_for(&server)
        .args(["-q", "index=main", "--quiet"])
        .assert()
        .code(7);
}

#[tokio::test]
async fn test_status_failure_returns_exit_code_8() {
    let server = MockServer::start().await;
    mount_submit(
        &server,
        ResponseTemplate::new(201).set_body_json(json!({"sid": "S1"})),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    splunk_query_cmd_for(&server)
        .args(["-q", "index=main", "--quiet"])
        .assert()
        .code(8);
}

#[tokio::test]
async fn test_job_timeout_returns_exit_code_9() {
    let server = MockServer::start().await;
    mount_submit(
        &server,
        ResponseTemplate::new(201).set_body_json(json!({"sid": "S1"})),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entry": [{"content": {"dispatchState": "RUNNING", "isDone": false}}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    splunk_query_cmd_for(&server)
        .env("SPLUNK_POLL_ATTEMPTS", "2")
        .args(["-q", "index=main", "--quiet"])
        .assert()
        .code(9);
}

#[test]
fn test_invalid_env_value_returns_exit_code_10() {
    splunk_query_cmd()
        .env("SPLUNK_URL", "http://127.0.0.1:1")
        .env("SPLUNK_MGMT_PORT", "not-a-port")
        .args(["-q", "index=main"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("SPLUNK_MGMT_PORT"));
}

#[test]
fn test_invalid_url_returns_exit_code_10() {
    splunk_query_cmd()
        .args(["-q", "index=main", "--url", "ftp://splunk.local"])
        .assert()
        .code(10);
}

#[test]
fn test_unreadable_query_file_returns_exit_code_2() {
    splunk_query_cmd()
        .env("SPLUNK_URL", "http://127.0.0.1:1")
        .args(["--query-file", "/nonexistent/query.spl"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read query file"));
}

#[test]
fn test_invalid_format_is_a_usage_error() {
    // clap reports usage errors with exit code 2.
    splunk_query_cmd()
        .args(["--format", "xml"])
        .assert()
        .code(2);
}
