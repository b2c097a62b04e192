// Sampling loop: one fetch per tick until the wall-clock deadline, then a fixed sleep.
// The sleep does not subtract fetch time, so the real cadence is interval + fetch latency.

use std::io::Write;
use std::time::Duration;

use tokio::time::Instant;
use tracing::instrument;

use crate::client::VoltageSource;
use crate::config::RunConfig;
use crate::models::SampleSeries;

/// "M min and S sec", or "S sec" under a minute. Sub-second part is dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (minutes, seconds) = (secs / 60, secs % 60);
    if minutes > 0 {
        format!("{} min and {} sec", minutes, seconds)
    } else {
        format!("{} sec", seconds)
    }
}

/// Deadline `duration` after `start`, saturating instead of overflowing the clock.
pub(crate) fn deadline_after(start: Instant, duration: Duration) -> Instant {
    start
        .checked_add(duration)
        .or_else(|| start.checked_add(FAR_FUTURE))
        .unwrap_or(start)
}

/// Roughly 30 years; the same horizon tokio uses for an unbounded sleep.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Polls `source` every `config.interval` until `config.duration` has passed.
///
/// Failed ticks are reported to `out` and skipped. Progress lines go to `out` whenever the
/// remaining sample count is a multiple of the plan's status update interval.
#[instrument(
    name = "sampler",
    skip_all,
    fields(address = %config.address, interval_secs = config.interval_secs)
)]
pub async fn collect<S, W>(source: &S, config: &RunConfig, out: &mut W) -> std::io::Result<SampleSeries>
where
    S: VoltageSource,
    W: Write,
{
    let plan = config.plan();
    let interval = config.interval();
    let start = Instant::now();
    let deadline = deadline_after(start, config.duration());

    let mut series = SampleSeries::new();
    let mut attempts: u64 = 0;

    while Instant::now() < deadline {
        attempts += 1;
        match source.fetch().await {
            Ok(sample) => {
                series.push(sample);
                tracing::debug!(
                    requested = sample.requested,
                    actual = sample.actual,
                    collected = series.len(),
                    "sample collected"
                );
                let remaining = plan.total_samples as i64 - series.len() as i64;
                if remaining.rem_euclid(plan.status_update_interval as i64) == 0 {
                    writeln!(
                        out,
                        "{} samples left to collect. Time elapsed: {}.",
                        remaining,
                        format_elapsed(start.elapsed())
                    )?;
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "fetch_voltages",
                    attempt = attempts,
                    "fetch failed, tick skipped"
                );
                writeln!(out, "Error fetching data: {}", e)?;
            }
        }
        tokio::time::sleep(interval).await;
    }

    let extremes = series.extremes();
    if extremes.is_set() {
        tracing::info!(
            attempts,
            collected = series.len(),
            expected = plan.total_samples,
            min_actual = extremes.min_actual,
            max_actual = extremes.max_actual,
            "sampling finished"
        );
    } else {
        tracing::info!(attempts, expected = plan.total_samples, "sampling finished without samples");
    }
    Ok(series)
}
