//! Router construction and the scrape endpoint.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use prometheus::{Encoder, TextEncoder, TEXT_FORMAT};
use purpleprom_collector::PurpleAirCollector;
use serde_json::json;
use std::sync::Arc;

/// Builds the exporter's HTTP app around a long-lived collector.
///
/// The collector is the router's explicit state; no process-wide metrics
/// registry is involved.
pub fn build_app(collector: Arc<PurpleAirCollector>) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/health", get(health))
        .with_state(collector)
}

/// Scrape endpoint: one collection pass per request, rendered in the
/// Prometheus text exposition format.
async fn metrics(State(collector): State<Arc<PurpleAirCollector>>) -> Response {
    let mut families = match collector.collect().await {
        Ok(families) => families,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build metric families");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    // The text encoder rejects families without data points, so statistics
    // no reachable sensor reported this pass are left out of the exposition.
    families.retain(|family| !family.get_metric().is_empty());

    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&families, &mut buf) {
        tracing::error!(error = %e, "Failed to encode metric families");
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
    }

    ([(header::CONTENT_TYPE, TEXT_FORMAT)], buf).into_response()
}

/// Liveness probe.
async fn health(State(collector): State<Arc<PurpleAirCollector>>) -> Response {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "sensors": collector.sensors().len(),
    }))
    .into_response()
}
