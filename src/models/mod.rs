// Domain models: device payload, samples, and the end-of-run summary

mod device;
mod report;
mod sample;

pub use device::SystemInfoResponse;
pub use report::SummaryReport;
pub use sample::{RunningExtremes, Sample, SampleSeries};
