//! Shared test utilities for caliper-sensor integration tests

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Json, Router};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use caliper_sensor::{Dispatcher, DispatcherConfig, HttpTransport};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Spawns a fake collector in the background, returns its bound address
///
/// Routes:
/// - `POST /created` answers 201 with `{"ok":true}`
/// - `POST /missing` answers 404 with a plain-text body
/// - `POST /no-content` answers 204
/// - `POST /unavailable` answers 503 with an empty body
/// - `POST /slow` answers 200 after five seconds
/// - `POST /echo` answers 200 with the request's headers and parsed body
pub async fn spawn_collector() -> SocketAddr {
    let app = Router::new()
        .route(
            "/created",
            post(|| async { (StatusCode::CREATED, Json(json!({ "ok": true }))) }),
        )
        .route(
            "/missing",
            post(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .route("/no-content", post(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/unavailable",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route(
            "/slow",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        )
        .route("/echo", post(echo));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

async fn echo(headers: HeaderMap, body: String) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    Json(json!({
        "contentType": header("content-type"),
        "contentLength": header("content-length"),
        "authorization": header("authorization"),
        "tenant": header("x-tenant"),
        "bodyLength": body.len(),
        "body": serde_json::from_str::<Value>(&body).unwrap_or(Value::Null),
    }))
}

/// Dispatcher over a proxy-free client, initialized for `addr` + `path`
#[allow(dead_code)]
pub fn dispatcher_for(addr: SocketAddr, path: &str) -> Dispatcher<HttpTransport> {
    dispatcher_with(DispatcherConfig::parse(&format!("http://{addr}{path}")).unwrap())
}

#[allow(dead_code)]
pub fn dispatcher_with(config: DispatcherConfig) -> Dispatcher<HttpTransport> {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let mut dispatcher = Dispatcher::new(HttpTransport::with_client(client));
    dispatcher.initialize(config).unwrap();
    dispatcher
}
