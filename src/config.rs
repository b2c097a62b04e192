// Benchmark config (optional TOML file) and the per-run plan derived from operator input.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::input::validate_ip_address;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub run: RunDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Address used when the timing input is rejected and the whole run falls back to defaults.
    #[serde(default = "default_fallback_address")]
    pub fallback_address: String,
    #[serde(default = "default_api_path")]
    pub api_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            fallback_address: default_fallback_address(),
            api_path: default_api_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_fallback_address() -> String {
    "192.168.2.117".into()
}

fn default_api_path() -> String {
    "/api/system/info".into()
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunDefaults {
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u64,
    #[serde(default = "default_interval_secs")]
    pub default_interval_secs: u64,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            default_duration_minutes: default_duration_minutes(),
            default_interval_secs: default_interval_secs(),
        }
    }
}

fn default_duration_minutes() -> u64 {
    1
}

fn default_interval_secs() -> u64 {
    3
}

impl BenchConfig {
    /// Loads the config file when a path is given; otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let s = std::fs::read_to_string(path).map_err(|e| {
                    anyhow::anyhow!("reading config {}: {}", path.display(), e)
                })?;
                Self::load_from_str(&s)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: BenchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            validate_ip_address(&self.device.fallback_address),
            "device.fallback_address must be a dotted-quad IPv4 address, got {:?}",
            self.device.fallback_address
        );
        anyhow::ensure!(
            self.device.api_path.starts_with('/'),
            "device.api_path must start with '/', got {:?}",
            self.device.api_path
        );
        anyhow::ensure!(
            self.device.request_timeout_secs > 0,
            "device.request_timeout_secs must be > 0, got {}",
            self.device.request_timeout_secs
        );
        anyhow::ensure!(
            self.run.default_duration_minutes > 0,
            "run.default_duration_minutes must be > 0, got {}",
            self.run.default_duration_minutes
        );
        anyhow::ensure!(
            self.run.default_interval_secs > 0,
            "run.default_interval_secs must be > 0, got {}",
            self.run.default_interval_secs
        );
        Ok(())
    }

    /// The fixed configuration substituted when duration or interval input is rejected.
    pub fn default_run(&self) -> RunConfig {
        RunConfig {
            address: self.device.fallback_address.clone(),
            duration_secs: self.run.default_duration_minutes * 60,
            interval_secs: self.run.default_interval_secs,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.device.request_timeout_secs)
    }
}

/// Target and timing for one run. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub address: String,
    pub duration_secs: u64,
    pub interval_secs: u64,
}

impl RunConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn status_url(&self, api_path: &str) -> String {
        format!("http://{}{}", self.address, api_path)
    }

    pub fn plan(&self) -> RunPlan {
        RunPlan::new(self.duration_secs, self.interval_secs)
    }
}

/// Sample budget derived from a RunConfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    /// `duration / interval`, integer division.
    pub total_samples: u64,
    /// Print progress whenever the remaining sample count is a multiple of this (about once a minute).
    pub status_update_interval: u64,
}

impl RunPlan {
    pub fn new(duration_secs: u64, interval_secs: u64) -> Self {
        let total_samples = duration_secs / interval_secs.max(1);
        let minutes = (duration_secs / 60).max(1);
        Self {
            total_samples,
            status_update_interval: (total_samples / minutes).max(1),
        }
    }
}
