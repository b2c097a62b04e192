// Deviation analysis: per-sample % deviation of actual from requested, split into
// below/above regimes, with sample-count based time attribution.

use crate::error::AnalysisError;
use crate::models::{Sample, SampleSeries, SummaryReport};

/// `(actual - requested) / requested * 100`, or `None` when that is undefined (requested == 0).
pub fn deviation_pct(sample: Sample) -> Option<f64> {
    if sample.requested == 0.0 {
        return None;
    }
    let pct = (sample.actual - sample.requested) / sample.requested * 100.0;
    pct.is_finite().then_some(pct)
}

/// Minutes attributed to `count` ticks of `interval_secs` each.
pub fn regime_minutes(count: usize, interval_secs: u64) -> f64 {
    (count as u64 * interval_secs) as f64 / 60.0
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Summarizes a finished run. Pure: the same series always yields the same report.
///
/// Zero deviations count toward neither regime. Samples with an undefined deviation are
/// excluded from both regimes but still count toward `requested_voltage_avg` and the extremes.
pub fn analyze(series: &SampleSeries, interval_secs: u64) -> Result<SummaryReport, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::NoData);
    }

    let mut below = Vec::new();
    let mut above = Vec::new();
    let mut excluded = 0usize;
    for sample in series.iter() {
        match deviation_pct(sample) {
            Some(pct) if pct < 0.0 => below.push(pct),
            Some(pct) if pct > 0.0 => above.push(pct),
            Some(_) => {}
            None => excluded += 1,
        }
    }
    if excluded > 0 {
        tracing::debug!(
            excluded,
            operation = "analyze",
            "samples with zero requested voltage left out of deviation averages"
        );
    }

    let avg_pct_below = mean(&below);
    let avg_pct_above = mean(&above);
    let requested_voltage_avg = mean(series.requested());
    let extremes = series.extremes();

    Ok(SummaryReport {
        avg_pct_below,
        avg_pct_above,
        avg_duration_below_minutes: regime_minutes(below.len(), interval_secs),
        avg_duration_above_minutes: regime_minutes(above.len(), interval_secs),
        requested_voltage_avg,
        avg_voltage_below: requested_voltage_avg * (1.0 + avg_pct_below / 100.0),
        avg_voltage_above: requested_voltage_avg * (1.0 + avg_pct_above / 100.0),
        min_actual: extremes.min_actual,
        max_actual: extremes.max_actual,
        sample_count: series.len(),
        excluded_sample_count: excluded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn deviation_pct_undefined_for_zero_requested() {
        assert_eq!(
            deviation_pct(Sample {
                requested: 0.0,
                actual: 5.0
            }),
            None
        );
        assert_eq!(
            deviation_pct(Sample {
                requested: 1000.0,
                actual: 950.0
            }),
            Some(-5.0)
        );
    }
}
