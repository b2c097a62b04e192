// Shared test helpers

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use voltbench::client::VoltageSource;
use voltbench::error::FetchError;
use voltbench::models::{Sample, SampleSeries};

pub fn series(pairs: &[(f64, f64)]) -> SampleSeries {
    pairs
        .iter()
        .map(|&(requested, actual)| Sample { requested, actual })
        .collect()
}

/// Scripted device: replays `responses` in order (then repeats the last one), optionally
/// taking `latency` per fetch, and records the tokio instant of every call.
pub struct FakeDevice {
    responses: Vec<Option<Sample>>,
    latency: Duration,
    calls: Mutex<Vec<tokio::time::Instant>>,
}

impl FakeDevice {
    pub fn new(responses: Vec<Option<Sample>>) -> Self {
        Self {
            responses,
            latency: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always(sample: Sample) -> Self {
        Self::new(vec![Some(sample)])
    }

    pub fn failing() -> Self {
        Self::new(vec![None])
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> Vec<tokio::time::Instant> {
        self.calls.lock().unwrap().clone()
    }
}

impl VoltageSource for FakeDevice {
    async fn fetch(&self) -> Result<Sample, FetchError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(tokio::time::Instant::now());
            calls.len() - 1
        };
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let response = self
            .responses
            .get(index)
            .or(self.responses.last())
            .copied()
            .flatten();
        response.ok_or(FetchError::Status(503))
    }
}
