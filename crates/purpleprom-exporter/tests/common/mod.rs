#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use purpleprom_collector::PurpleAirCollector;
use purpleprom_exporter::app;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Builds the exporter app over the given sensor addresses.
pub fn build_exporter(sensors: Vec<String>) -> Router {
    app::build_app(Arc::new(PurpleAirCollector::new(sensors)))
}

/// Serves a canned status document on `/json` from an ephemeral port and
/// returns the sensor address (host:port).
pub async fn spawn_sensor(body: Value) -> String {
    let app = Router::new().route("/json", get(move || async move { Json(body) }));
    spawn_app(app).await
}

/// Serves an arbitrary router from an ephemeral port.
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock sensor should bind");
    let addr = listener.local_addr().expect("mock sensor should have an addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock sensor serve");
    });
    addr.to_string()
}

/// An address nothing listens on: bind an ephemeral port, then drop it.
pub async fn refused_addr() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("probe listener should bind");
    let addr = listener.local_addr().expect("probe listener addr");
    drop(listener);
    addr.to_string()
}

/// Drives one GET against the exporter app in-process.
pub async fn get_text(app: &Router, path: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("app should answer");

    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let body = String::from_utf8(bytes.to_vec()).expect("body should be UTF-8");
    (status, content_type, body)
}

/// The sample lines of one family in a text exposition body.
pub fn metric_lines<'a>(body: &'a str, family: &str) -> Vec<&'a str> {
    let prefix = format!("{family}{{");
    body.lines()
        .filter(|line| line.starts_with(&prefix) || *line == family)
        .collect()
}
