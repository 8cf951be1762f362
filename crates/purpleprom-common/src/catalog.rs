//! The fixed catalog of statistics collected from each sensor and the
//! naming rules for the metric families built from them.

/// Statistic keys read from a sensor's `/json` document, in the order their
/// metric families are emitted on every scrape.
pub const STATS_TO_COLLECT: [&str; 17] = [
    "current_temp_f",
    "current_humidity",
    "current_dewpoint_f",
    "pressure",
    "pm2.5_aqi",
    "p_10_0_um",
    "p_5_0_um",
    "p_2_5_um",
    "p_1_0_um",
    "p_0_5_um",
    "p_0_3_um",
    "pm10_0_cf_1",
    "pm2_5_cf_1",
    "pm1_0_cf_1",
    "pm10_0_atm",
    "pm2_5_atm",
    "pm1_0_atm",
];

/// Namespace token prefixed to every metric family name.
pub const KEY_PREFIX: &str = "purpleair";

/// Label schema of every family: the sensor's self-reported id and the
/// channel ("a" or "b") the reading came from.
pub const LABELS: [&str; 2] = ["sensor_id", "module"];

/// Metric family name for a statistic: namespace-prefixed, with any `.`
/// (illegal in a metric name) replaced by `_`.
///
/// # Examples
///
/// ```
/// use purpleprom_common::catalog::family_name;
///
/// assert_eq!(family_name("pressure"), "purpleair_pressure");
/// assert_eq!(family_name("pm2.5_aqi"), "purpleair_pm2_5_aqi");
/// ```
pub fn family_name(stat: &str) -> String {
    format!("{KEY_PREFIX}_{stat}").replace('.', "_")
}

/// Help string for a statistic's family. Uses the raw statistic name.
pub fn family_help(stat: &str) -> String {
    format!("Gauge for {stat}")
}
