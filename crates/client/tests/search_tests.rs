//! End-to-end search flow tests against a mock Splunk server.
//!
//! Covers submission, SID resolution, polling, result fetching and
//! normalization through the public `search` entry point.
//!
//! # What this does NOT handle
//! - Management-port retry (see retry_tests.rs)
//! - Authentication headers (see auth_tests.rs)

mod common;

use common::*;
use wiremock::matchers::{body_string_contains, method, path, query_param};

#[tokio::test]
async fn test_search_returns_normalized_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains("search=search+index%3Dmain+earliest%3D-1h"))
        .and(body_string_contains("output_mode=json"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .and(query_param("output_mode", "json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_done.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1/results"))
        .and(query_param("output_mode", "json"))
        .and(query_param("count", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/results_fields.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = search(
        "index=main earliest=-1h",
        &config_for(&server),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].keys().collect::<Vec<_>>(), vec!["Name", "Score"]);
    assert_eq!(records[0].get("Name"), Some("Alice"));
    assert_eq!(records[0].get("Score"), Some("70"));
}

#[tokio::test]
async fn test_leading_search_keyword_is_not_doubled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains("search=search+index%3Dmain&"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    let records = search(
        "  Search index=main ",
        &config_for(&server),
        &CancellationToken::new(),
    )
    .await
    .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_generating_command_is_sent_without_keyword() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains("search=%7C+makeresults"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    search("| makeresults", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sid_from_entry_name() {
    let server = MockServer::start().await;
    let sid = "admin__admin__search__1712345678.42";

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_entry.json")),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{sid}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_done.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{sid}/results")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/results_fields.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(records[0].get("Name"), Some("Alice"));
}

#[tokio::test]
async fn test_sid_from_bare_text_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_string("  S1\n"))
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    let records = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_sid_from_xml_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_string("<?xml version=\"1.0\"?>\n<response><sid>S1</sid></response>"),
        )
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    let records = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_sid_from_location_header_on_redirect() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(303).insert_header(
                "Location",
                format!("{}/services/search/jobs/S2", server.uri()).as_str(),
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_done.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S2/results"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/results_fields.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_no_sid_returned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let err = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::NoSidReturned), "got {err:?}");
}

#[tokio::test]
async fn test_polls_until_done() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .mount(&server)
        .await;

    // Two RUNNING responses, then the happy-path DONE mock takes over.
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_running.json")),
        )
        .up_to_n_times(2)
        .expect(2)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    let records = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_job_timeout_after_max_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_running.json")),
        )
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1/results"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = loader_for(&server)
        .with_poll_max_attempts(3)
        .build()
        .unwrap();
    let err = search("index=main", &config, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(
        matches!(err, SearchError::JobTimeout { attempts: 3 }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_status_failure_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(
        matches!(err, SearchError::JobStatusFetchFailed { status: 404 }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_event_results_keep_every_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_done.json")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1/results"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/results_events.json")),
        )
        .mount(&server)
        .await;

    let records = search("index=web", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].keys().collect::<Vec<_>>(),
        vec!["_time", "host", "_raw", "tag"]
    );
    assert_eq!(records[0].get("tag"), Some("web,prod"));
    assert_eq!(records[1].get("tag"), Some(""));
    assert_eq!(records[1].get("_raw"), Some("GET /missing 404"));
}

#[tokio::test]
async fn test_results_count_is_configurable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1/results"))
        .and(query_param("count", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/results_fields.json")),
        )
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    let config = loader_for(&server).with_results_count(5).build().unwrap();
    search("index=main", &config, &CancellationToken::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_malformed_results_yield_no_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    let records = search("index=main", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_cancellation_stops_polling() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/submit_sid.json")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/S1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/status_running.json")),
        )
        .mount(&server)
        .await;

    let config = loader_for(&server)
        .with_poll_max_attempts(1000)
        .build()
        .unwrap();
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = search("index=main", &config, &cancel).await.unwrap_err();
    assert!(matches!(err, SearchError::Cancelled), "got {err:?}");
}

#[tokio::test]
async fn test_missing_query_and_base_url() {
    let server = MockServer::start().await;
    let err = search("   ", &config_for(&server), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::QueryRequired));

    let err = search("index=main", &Config::default(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::BaseUrlRequired));
}
