// Console text: start banner, narrative summary, and the JSON summary.

use crate::config::{RunConfig, RunPlan};
use crate::models::SummaryReport;

pub fn banner(config: &RunConfig, plan: &RunPlan) -> String {
    format!(
        "Starting data collection every {} seconds for {} minutes.\n{} samples to be collected.",
        config.interval_secs,
        config.duration_secs / 60,
        plan.total_samples
    )
}

/// Human-readable paragraph. Voltages to 3 decimals, percentages and minutes to 2.
pub fn narrative(report: &SummaryReport) -> String {
    format!(
        "Core Voltage Actual was on average {:.2}% below Core Voltage ({:.3} mV), which corresponds to \
         approximately {:.2} minutes of the total monitoring period. On average, Core Voltage Actual was \
         {:.2}% higher than Core Voltage ({:.3} mV), which corresponds to approximately {:.2} minutes of \
         the total monitoring period.\n\
         Lowest Core Voltage Actual Spike: {:.3} mV\n\
         Highest Core Voltage Actual Spike: {:.3} mV",
        report.avg_pct_below.abs(),
        report.avg_voltage_below,
        report.avg_duration_below_minutes,
        report.avg_pct_above,
        report.avg_voltage_above,
        report.avg_duration_above_minutes,
        report.min_actual,
        report.max_actual,
    )
}

/// Flat key-value rendering (pretty JSON, camelCase keys).
pub fn structured(report: &SummaryReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Full end-of-run text. `json_only` drops the narrative.
pub fn render(report: &SummaryReport, json_only: bool) -> serde_json::Result<String> {
    let json = structured(report)?;
    if json_only {
        return Ok(json);
    }
    Ok(format!(
        "Summary of voltage differences:\n{}\nDetailed summary (JSON format):\n{}",
        narrative(report),
        json
    ))
}
