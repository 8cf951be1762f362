//! HTTP client for the PurpleAir local status endpoint.

use crate::error::FetchError;
use purpleprom_common::report::SensorReport;
use serde_json::Value;

/// Status URL for a sensor address (hostname or IP). Local sensors speak
/// plain HTTP on the fixed `/json` path.
pub fn status_url(address: &str) -> String {
    format!("http://{address}/json")
}

/// Thin wrapper over a shared [`reqwest::Client`] that fetches and validates
/// one sensor's status document.
///
/// Requests carry no timeout and are never retried: a slow sensor delays the
/// pass, an unreachable one is skipped by the caller.
#[derive(Debug, Clone)]
pub struct SensorClient {
    http: reqwest::Client,
}

impl SensorClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetches `http://<address>/json` and parses it into a [`SensorReport`].
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on network failure, non-2xx status, an
    /// unreadable or non-JSON body, or a body without a usable `SensorId`.
    pub async fn fetch(&self, address: &str) -> Result<SensorReport, FetchError> {
        let url = status_url(address);
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.text().await.map_err(FetchError::Body)?;
        let doc: Value = serde_json::from_str(&body)?;
        Ok(SensorReport::from_json(doc)?)
    }
}

impl Default for SensorClient {
    fn default() -> Self {
        Self::new()
    }
}
