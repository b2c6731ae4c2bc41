//! Dispatcher over real HTTP against a local collector

mod common;

use std::time::Duration;

use caliper_core::entities::Person;
use caliper_core::{Action, Event};
use caliper_sensor::{
    CONTENT_TYPE_JSON, DispatcherConfig, SendError, SendResponse, SensorConfig, TransportError,
};
use serde_json::json;

use common::{dispatcher_for, dispatcher_with, spawn_collector};

fn sensor() -> SensorConfig {
    SensorConfig::new("https://example.edu/sensor/001")
}

fn completed(user: &str) -> Event {
    Event::assessment_item()
        .with_actor(Person::new(format!("https://example.edu/user/{user}")))
        .with_action(Action::Completed)
}

#[tokio::test]
async fn created_response_body_is_parsed_json() {
    let addr = spawn_collector().await;
    let dispatcher = dispatcher_for(addr, "/created");

    let response = dispatcher.send(&sensor(), [completed("1")]).await.unwrap();
    assert_eq!(response, SendResponse::Json(json!({ "ok": true })));
}

#[tokio::test]
async fn no_content_is_empty_success() {
    let addr = spawn_collector().await;
    let dispatcher = dispatcher_for(addr, "/no-content");

    let response = dispatcher.send(&sensor(), [completed("1")]).await.unwrap();
    assert_eq!(response, SendResponse::Empty);
}

#[tokio::test]
async fn not_found_is_http_error_with_body_and_payload() {
    let addr = spawn_collector().await;
    let dispatcher = dispatcher_for(addr, "/missing");

    let err = dispatcher
        .send(&sensor(), [completed("42")])
        .await
        .unwrap_err();
    let http = match err {
        SendError::Http(http) => http,
        other => panic!("expected HttpError, got {other:?}"),
    };
    assert_eq!(http.status_code, 404);
    assert_eq!(http.context.body.as_deref(), Some("not found"));
    assert_eq!(
        http.context.payload[0]["actor"]["@id"],
        "https://example.edu/user/42"
    );
}

#[tokio::test]
async fn service_unavailable_is_retriable() {
    let addr = spawn_collector().await;
    let dispatcher = dispatcher_for(addr, "/unavailable");

    let err = dispatcher.send(&sensor(), [completed("1")]).await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert!(err.is_retriable());
}

#[tokio::test]
async fn request_carries_json_body_and_merged_headers() {
    let addr = spawn_collector().await;
    let config = DispatcherConfig::parse(&format!("http://{addr}/echo"))
        .unwrap()
        .with_api_key("Bearer base")
        .with_header("X-Tenant", "base");
    let dispatcher = dispatcher_with(config);

    let sensor = sensor().with_header("X-Tenant", "sensor");
    let response = dispatcher
        .send(&sensor, [completed("1"), completed("2")])
        .await
        .unwrap();
    let echo = response.as_json().unwrap();

    assert_eq!(echo["contentType"], CONTENT_TYPE_JSON);
    assert_eq!(echo["authorization"], "Bearer base");
    assert_eq!(echo["tenant"], "sensor");
    assert_eq!(
        echo["contentLength"],
        echo["bodyLength"].as_u64().unwrap().to_string()
    );
    assert_eq!(echo["body"]["sensor"], "https://example.edu/sensor/001");
    assert_eq!(echo["body"]["data"].as_array().unwrap().len(), 2);
    assert_eq!(
        echo["body"]["data"][1]["actor"]["@id"],
        "https://example.edu/user/2"
    );
}

#[tokio::test]
async fn slow_collector_times_out() {
    let addr = spawn_collector().await;
    let dispatcher = dispatcher_for(addr, "/slow");

    let sensor = sensor().with_timeout(Duration::from_millis(200));
    let err = dispatcher.send(&sensor, [completed("1")]).await.unwrap_err();
    assert!(
        matches!(err, SendError::Transport(TransportError::Timeout)),
        "expected timeout, got {err:?}"
    );
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    // bind then drop to find a port nothing listens on
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let dispatcher = dispatcher_for(addr, "/created");

    let err = dispatcher.send(&sensor(), [completed("1")]).await.unwrap_err();
    assert!(
        matches!(err, SendError::Transport(TransportError::Connect(_))),
        "expected connect error, got {err:?}"
    );
    assert!(err.is_retriable());
}
