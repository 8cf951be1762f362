//! The per-scrape collection pass.

use crate::client::{status_url, SensorClient};
use prometheus::core::Collector as _;
use prometheus::proto::MetricFamily;
use prometheus::{GaugeVec, Opts};
use purpleprom_common::catalog::{family_help, family_name, LABELS, STATS_TO_COLLECT};
use purpleprom_common::report::{Channel, SensorReport};
use std::collections::BTreeMap;

/// The most recently parsed status document of every sensor that answered
/// during the current pass, keyed by configured address. Rebuilt from
/// scratch on every pass; a sensor that failed this pass has no entry.
pub(crate) type Snapshot = BTreeMap<String, SensorReport>;

/// Polls the configured sensors and reshapes their readings into gauge
/// metric families, one pass per scrape request.
///
/// The sensor list is immutable after construction; each [`collect`] call
/// builds its own snapshot, so overlapping scrapes never share mutable
/// state.
///
/// [`collect`]: PurpleAirCollector::collect
pub struct PurpleAirCollector {
    sensors: Vec<String>,
    client: SensorClient,
}

impl PurpleAirCollector {
    pub fn new(sensors: Vec<String>) -> Self {
        Self {
            sensors,
            client: SensorClient::new(),
        }
    }

    /// The configured sensor addresses, in polling order.
    pub fn sensors(&self) -> &[String] {
        &self.sensors
    }

    /// Runs one collection pass: poll every sensor in list order, then build
    /// the full statistic catalog as metric families from whatever answered.
    ///
    /// A sensor that cannot be fetched or parsed is logged and skipped; it
    /// contributes zero data points and never aborts the pass. Two passes
    /// over identical sensor responses produce identical families.
    ///
    /// # Errors
    ///
    /// Only metric descriptor construction can fail, which the fixed catalog
    /// never triggers at runtime.
    pub async fn collect(&self) -> Result<Vec<MetricFamily>, prometheus::Error> {
        tracing::debug!("Request to collect started");
        let snapshot = self.snapshot().await;
        tracing::debug!(sensors = snapshot.len(), "Collection complete");
        build_families(&snapshot)
    }

    /// Polls each sensor sequentially and gathers the successful responses.
    pub(crate) async fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for sensor in &self.sensors {
            match self.client.fetch(sensor).await {
                Ok(report) => {
                    tracing::info!(url = %status_url(sensor), "Collected from sensor");
                    snapshot.insert(sensor.clone(), report);
                }
                Err(e) => {
                    tracing::error!(sensor = %sensor, "Could not connect to sensor, skipping");
                    tracing::debug!(sensor = %sensor, error = %e, "Connection error");
                }
            }
        }
        snapshot
    }
}

/// Builds one gauge family per catalog statistic, in catalog order.
///
/// Every sensor in the snapshot contributes up to two data points per
/// family, one per channel, labeled with the device's self-reported id.
/// Families with no data points are still emitted.
pub(crate) fn build_families(snapshot: &Snapshot) -> Result<Vec<MetricFamily>, prometheus::Error> {
    let mut families = Vec::with_capacity(STATS_TO_COLLECT.len());
    for stat in STATS_TO_COLLECT {
        let gauge = GaugeVec::new(Opts::new(family_name(stat), family_help(stat)), &LABELS)?;
        for report in snapshot.values() {
            for channel in Channel::ALL {
                if let Some(value) = report.value(stat, channel) {
                    gauge
                        .with_label_values(&[report.sensor_id(), channel.label()])
                        .set(value);
                }
            }
        }
        families.extend(gauge.collect());
    }
    Ok(families)
}
