//! Errors raised while fetching a single sensor's status.
//!
//! Every variant is recovered per-sensor by the collection pass: the sensor
//! is logged and excluded, and the pass carries on with the remaining
//! sensors.
//!
//! # Examples
//!
//! ```rust
//! use purpleprom_collector::FetchError;
//!
//! let err = FetchError::Status(reqwest::StatusCode::BAD_GATEWAY);
//! assert!(err.to_string().contains("502"));
//! ```

use purpleprom_common::report::ReportError;

/// Why a sensor contributed no snapshot entry this pass.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network-level failure: connection refused, DNS failure, reset, etc.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The sensor answered with a non-2xx status.
    #[error("sensor returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be read off the wire.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed but did not look like a sensor status document.
    #[error("unexpected sensor schema: {0}")]
    Report(#[from] ReportError),
}
