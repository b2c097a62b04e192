// Device status client: one GET per tick against the miner's system info endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::models::{Sample, SystemInfoResponse};
use crate::version;

/// Anything the sampler can read a (requested, actual) voltage pair from.
pub trait VoltageSource {
    fn fetch(&self) -> impl Future<Output = Result<Sample, FetchError>> + Send;
}

/// HTTP client for one device.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: Client,
    url: String,
}

impl DeviceClient {
    /// `url` is the full status URL, e.g. `http://192.168.2.117/api/system/info`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_info(&self) -> Result<SystemInfoResponse, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .json::<SystemInfoResponse>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl VoltageSource for DeviceClient {
    async fn fetch(&self) -> Result<Sample, FetchError> {
        let info = self.fetch_info().await?;
        sample_from_info(&info)
    }
}

/// Both fields must be present; a half-filled payload is not a sample.
pub fn sample_from_info(info: &SystemInfoResponse) -> Result<Sample, FetchError> {
    let requested = info
        .core_voltage
        .ok_or(FetchError::MissingField("coreVoltage"))?;
    let actual = info
        .core_voltage_actual
        .ok_or(FetchError::MissingField("coreVoltageActual"))?;
    Ok(Sample { requested, actual })
}
