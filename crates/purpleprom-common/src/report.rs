//! Structured form of a sensor's `/json` status document.
//!
//! A PurpleAir status document is a flat JSON object mixing numeric readings
//! with descriptive fields (`Geo`, `DateTime`, ...). [`SensorReport`] keeps
//! the device's self-reported id and the numeric fields only, so lookups
//! never have to reason about JSON value shapes downstream: a key that is
//! absent, `null`, or non-numeric yields no reading.

use serde_json::Value;
use std::collections::HashMap;

/// Which of a dual-sensor device's two readings a data point comes from.
///
/// Channel A is the statistic's own key; channel B is the same key suffixed
/// `_b`, present on devices with a second particulate sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
}

impl Channel {
    /// Both channels, in emission order.
    pub const ALL: [Channel; 2] = [Channel::A, Channel::B];

    /// The label value carried in the `module` label.
    pub fn label(self) -> &'static str {
        match self {
            Channel::A => "a",
            Channel::B => "b",
        }
    }

    /// The JSON key under which this channel reports `stat`.
    pub fn key(self, stat: &str) -> String {
        match self {
            Channel::A => stat.to_string(),
            Channel::B => format!("{stat}_b"),
        }
    }
}

/// A sensor response that could not be turned into a [`SensorReport`].
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The response body was valid JSON but not an object.
    #[error("sensor response is not a JSON object")]
    NotAnObject,

    /// The response object carries no string `SensorId` field. Without the
    /// device's own id there is nothing to label its data points with.
    #[error("sensor response has no SensorId field")]
    MissingSensorId,
}

/// One sensor's most recent status, reduced to the fields the exporter can
/// publish: the self-reported device id and every numeric reading.
///
/// # Examples
///
/// ```
/// use purpleprom_common::report::{Channel, SensorReport};
/// use serde_json::json;
///
/// let report = SensorReport::from_json(json!({
///     "SensorId": "84:f3:eb:1:2:3",
///     "pressure": 1010.25,
///     "pressure_b": 1009.75,
///     "Geo": "PurpleAir-1234",
/// }))
/// .unwrap();
///
/// assert_eq!(report.sensor_id(), "84:f3:eb:1:2:3");
/// assert_eq!(report.value("pressure", Channel::A), Some(1010.25));
/// assert_eq!(report.value("pressure", Channel::B), Some(1009.75));
/// assert_eq!(report.value("Geo", Channel::A), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReport {
    sensor_id: String,
    values: HashMap<String, f64>,
}

impl SensorReport {
    /// Builds a report from a parsed status document.
    ///
    /// Keeps every field whose value is a JSON number; `null` and
    /// non-numeric fields are dropped, so a later lookup treats "present
    /// but null" exactly like "absent".
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when the document is not an object or lacks
    /// a string `SensorId`.
    pub fn from_json(doc: Value) -> Result<Self, ReportError> {
        let Value::Object(fields) = doc else {
            return Err(ReportError::NotAnObject);
        };
        let sensor_id = fields
            .get("SensorId")
            .and_then(Value::as_str)
            .ok_or(ReportError::MissingSensorId)?
            .to_string();
        let values = fields
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|n| (key, n)))
            .collect();
        Ok(Self { sensor_id, values })
    }

    /// The device's self-reported id, used as the `sensor_id` label value.
    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    /// The reading for `stat` on `channel`, if the device reported one.
    pub fn value(&self, stat: &str, channel: Channel) -> Option<f64> {
        self.values.get(channel.key(stat).as_str()).copied()
    }
}
