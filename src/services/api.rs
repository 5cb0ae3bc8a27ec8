use crate::config::Config;
use crate::models::{
    error::AppError,
    station::{Station, StationStatus},
    system_info::SystemInformation,
};
use reqwest::Url;
use serde::de::DeserializeOwned;

const PATH_PREFIX: &str = "bike-stations";

// API CONFIGURATION
/// Configuration for the bike-stations backend client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/bike-stations/{location}/stations`
    pub fn stations_url(&self, location: &str) -> Result<Url, AppError> {
        self.endpoint(&[location, "stations"])
    }

    /// `/bike-stations/{location}/station-status/{id}`
    pub fn station_status_url(&self, location: &str, station_id: &str) -> Result<Url, AppError> {
        self.endpoint(&[location, "station-status", station_id])
    }

    /// `/bike-stations/{location}/system-info`
    pub fn system_info_url(&self, location: &str) -> Result<Url, AppError> {
        self.endpoint(&[location, "system-info"])
    }

    /// Appends percent-encoded segments under the `bike-stations` prefix,
    /// keeping any path the base URL already carries.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            AppError::ConfigError(format!("Invalid API base URL '{}': {e}", self.base_url))
        })?;

        url.path_segments_mut()
            .map_err(|()| {
                AppError::ConfigError(format!("API base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(PATH_PREFIX)
            .extend(segments);

        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
        }
    }
}

// BIKE SHARE CLIENT
/// HTTP client for the bike-stations backend.
pub struct BikeShareClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BikeShareClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Lists every station of a location.
    pub async fn fetch_stations(&self, location: &str) -> Result<Vec<Station>, AppError> {
        let url = self.config.stations_url(location)?;
        self.get_json(url).await
    }

    /// Fetches live availability for one station.
    pub async fn fetch_station_status(
        &self,
        location: &str,
        station_id: &str,
    ) -> Result<StationStatus, AppError> {
        let url = self.config.station_status_url(location, station_id)?;
        self.get_json(url).await
    }

    /// Fetches operator metadata for a location.
    pub async fn fetch_system_information(
        &self,
        location: &str,
    ) -> Result<SystemInformation, AppError> {
        let url = self.config.system_info_url(location)?;
        self.get_json(url).await
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &url, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse response from {url}: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, url: &Url, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(url.path().to_string()),
            code => AppError::Status {
                status: code,
                body: body.to_string(),
            },
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Lists stations using default configuration.
pub async fn fetch_stations(location: &str) -> Result<Vec<Station>, AppError> {
    BikeShareClient::new()?.fetch_stations(location).await
}

/// Fetches one station's status using default configuration.
pub async fn fetch_station_status(
    location: &str,
    station_id: &str,
) -> Result<StationStatus, AppError> {
    BikeShareClient::new()?
        .fetch_station_status(location, station_id)
        .await
}

/// Fetches system metadata using default configuration.
pub async fn fetch_system_information(location: &str) -> Result<SystemInformation, AppError> {
    BikeShareClient::new()?
        .fetch_system_information(location)
        .await
}
