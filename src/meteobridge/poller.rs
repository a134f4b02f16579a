use std::time::Duration;

use anyhow::{Context as _, Result};
use chrono_tz::Tz;
use reqwest::Url;

use crate::meteobridge::{
    DecodeError, DeviceConfig, PollError, build_snapshot, decode, redacted,
};
use crate::snapshot::{MeasurementSnapshot, merge};
use crate::units::UnitSystem;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches and decodes readings from one logger.
///
/// Calls are expected to be single-flight: the host schedules one refresh at
/// a time and keeps the returned snapshot.
#[derive(Debug, Clone)]
pub struct Poller {
    client: reqwest::Client,
    url: Url,
    host: String,
    unit_system: UnitSystem,
    timezone: Tz,
}

impl Poller {
    pub fn new(device: &DeviceConfig, unit_system: UnitSystem, timezone: Tz) -> Result<Self> {
        Self::with_timeout(device, unit_system, timezone, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        device: &DeviceConfig,
        unit_system: UnitSystem,
        timezone: Tz,
        timeout: Duration,
    ) -> Result<Self> {
        let url = device.device_url().context("failed to build Meteobridge URL")?;
        // The logger sits on the local network.
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            url,
            host: device.host.clone(),
            unit_system,
            timezone,
        })
    }

    pub async fn fetch(&self) -> Result<String, PollError> {
        log::debug!("GET {}", redacted(&self.url));

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| PollError::Transport {
                host: self.host.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status {
                host: self.host.clone(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| PollError::Transport {
            host: self.host.clone(),
            source,
        })?;
        log::trace!("raw response from {}: {body}", self.host);

        Ok(body)
    }

    /// Fetch, decode and build a fresh snapshot. Forecast fields are unset.
    pub async fn poll(&self) -> Result<MeasurementSnapshot, PollError> {
        let body = self.fetch().await?;
        let rows = decode(&body)?;
        if rows.len() > 1 {
            log::debug!("{} rows from {}, using the last", rows.len(), self.host);
        }

        let row = rows.last().ok_or(DecodeError::EmptyBody)?;
        Ok(build_snapshot(row, self.unit_system, self.timezone)?)
    }

    pub async fn refresh(
        &self,
        retained: Option<&MeasurementSnapshot>,
    ) -> Result<MeasurementSnapshot, PollError> {
        let fresh = self.poll().await?;
        Ok(merge(fresh, retained))
    }
}
