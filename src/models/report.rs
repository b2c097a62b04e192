// End-of-run deviation summary

use serde::{Deserialize, Serialize};

/// Output of the analyzer. Percentages are signed (below is <= 0), durations are minutes,
/// voltages are in the device's unit (mV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub avg_pct_below: f64,
    pub avg_pct_above: f64,
    pub avg_duration_below_minutes: f64,
    pub avg_duration_above_minutes: f64,
    pub requested_voltage_avg: f64,
    pub avg_voltage_below: f64,
    pub avg_voltage_above: f64,
    pub min_actual: f64,
    pub max_actual: f64,
    /// Paired samples analysed.
    pub sample_count: usize,
    /// Samples left out of both regimes because their deviation is undefined (requested == 0).
    pub excluded_sample_count: usize,
}
