//! End-to-end tests for the composed application context
//!
//! **Purpose**: exercise the wiring the composition root produces - from
//! projector trigger down to the real HTTP transport and back up through
//! the observable channels.
//!
//! **Infrastructure:**
//! - WireMock HTTP server standing in for the roster endpoint

use std::time::Duration;

use multisync_app::AppContext;
use multisync_domain::{Config, FetchError, RosterConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WELL_FORMED: &str = r#"{"memberList":[
    {"activityname":"A","name":"Ann","mbti":"INTJ"},
    {"activityname":"B","name":"Bea","mbti":"ENFP"}
]}"#;

fn config_for(endpoint: String) -> Config {
    Config { roster: RosterConfig { endpoint } }
}

async fn roster_server(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/group"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn task_trigger_populates_projector_state() {
    let server = roster_server(200, WELL_FORMED).await;
    let context =
        AppContext::build(config_for(format!("{}/group", server.uri()))).expect("context");
    let mut roster_rx = context.roster.subscribe_roster();

    context.roster.refresh().await;

    assert!(roster_rx.has_changed().unwrap());
    assert_eq!(context.roster.member_count(), 2);
    assert_eq!(context.roster.member_at(0).unwrap().name, "Ann");
    assert_eq!(context.roster.member_at(1).unwrap().personality_code, "ENFP");
    assert_eq!(context.roster.rows()[1].display_name, "Bea");

    // A subscriber arriving after the fact still sees the latest roster.
    let late_rx = context.roster.subscribe_roster();
    assert_eq!(late_rx.borrow().members.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn callback_trigger_populates_projector_state() {
    let server = roster_server(200, WELL_FORMED).await;
    let context =
        AppContext::build(config_for(format!("{}/group", server.uri()))).expect("context");
    let mut roster_rx = context.roster.subscribe_roster();

    context.roster.refresh_with_callback();

    tokio::time::timeout(Duration::from_secs(5), roster_rx.changed())
        .await
        .expect("roster emitted")
        .expect("sender alive");
    assert_eq!(context.roster.member_count(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn stream_trigger_populates_projector_state() {
    let server = roster_server(200, WELL_FORMED).await;
    let context =
        AppContext::build(config_for(format!("{}/group", server.uri()))).expect("context");

    context.roster.refresh_with_stream().await.expect("stream task");

    assert_eq!(context.roster.member_count(), 2);
    assert_eq!(context.roster.rows().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_fetch_emits_error_and_leaves_state_empty() {
    let server = roster_server(404, "").await;
    let context =
        AppContext::build(config_for(format!("{}/group", server.uri()))).expect("context");
    let mut roster_rx = context.roster.subscribe_roster();
    let mut error_rx = context.roster.subscribe_errors();

    context.roster.refresh().await;

    assert_eq!(error_rx.try_recv().unwrap(), FetchError::StatusRejected);
    assert!(!roster_rx.has_changed().unwrap());
    assert_eq!(context.roster.member_count(), 0);
    assert!(context.roster.member_at(0).is_none());
    assert!(context.roster.rows().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn two_identical_fetches_emit_twice() {
    let server = roster_server(200, WELL_FORMED).await;
    let context =
        AppContext::build(config_for(format!("{}/group", server.uri()))).expect("context");
    let mut roster_rx = context.roster.subscribe_roster();

    context.roster.refresh().await;
    assert!(roster_rx.has_changed().unwrap());
    let first = roster_rx.borrow_and_update().clone();

    context.roster.refresh().await;
    assert!(roster_rx.has_changed().unwrap());
    let second = roster_rx.borrow_and_update().clone();

    assert_eq!(first, second);
}

#[test]
fn invalid_endpoint_fails_at_build_time() {
    let result = AppContext::build(config_for("definitely not a url".to_string()));
    assert!(result.is_err());
}
