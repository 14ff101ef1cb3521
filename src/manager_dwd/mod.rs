pub mod models;

use std::time::Duration;
use reqwest::blocking::Client;
use anyhow::Result;
use thiserror::Error;
use crate::manager_dwd::models::PollenForecast;

const DWD_URL: &str = "https://opendata.dwd.de/climate_environment/health/alerts/s31fg.json";

/// Struct for fetching pollen forecasts from Deutscher Wetterdienst
pub struct Dwd {
    client: Client,
    url: String,
}

impl Dwd {
    /// Returns a Dwd struct ready for fetching pollen forecasts
    ///
    pub fn new() -> Result<Dwd, DwdError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Dwd {
            client,
            url: DWD_URL.to_string(),
        })
    }

    /// Retrieves the current pollen forecast.
    /// A non-success http status is an error just as a network or parse failure.
    ///
    pub fn fetch(&self) -> Result<PollenForecast, DwdError> {
        let response = self.client
            .get(&self.url)
            .send()?
            .error_for_status()?;

        let json = response.text()?;

        let forecast: PollenForecast = serde_json::from_str(&json)
            .map_err(|e| DwdError::ParseError(e.to_string()))?;

        Ok(forecast)
    }
}

#[derive(Error, Debug)]
pub enum DwdError {
    #[error("ParseError: {0}")]
    ParseError(String),
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
}
