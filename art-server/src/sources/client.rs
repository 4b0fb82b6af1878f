//! Open-data catalog client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::SourceError;
use super::raw::{RawArtwork, StationCollection};
use super::snapshot::{Snapshot, parse_json};

/// Default station catalog endpoint (MTA subway stations, GeoJSON).
pub const DEFAULT_STATIONS_URL: &str = "https://data.ny.gov/resource/39hk-dx4f.geojson";

/// Default artwork catalog endpoint (MTA permanent art catalog).
pub const DEFAULT_ARTWORKS_URL: &str = "https://data.ny.gov/resource/4y8j-9pkd.json";

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct SourceClientConfig {
    pub stations_url: String,
    pub artworks_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SourceClientConfig {
    /// Create a config pointing at the public catalogs.
    pub fn new() -> Self {
        Self {
            stations_url: DEFAULT_STATIONS_URL.to_string(),
            artworks_url: DEFAULT_ARTWORKS_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set custom endpoints (for testing or mirrors).
    pub fn with_urls(mut self, stations: impl Into<String>, artworks: impl Into<String>) -> Self {
        self.stations_url = stations.into();
        self.artworks_url = artworks.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for SourceClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the two open-data catalogs.
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: reqwest::Client,
    config: SourceClientConfig,
}

impl SourceClient {
    pub fn new(config: SourceClientConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch the station catalog.
    pub async fn fetch_stations(&self) -> Result<StationCollection, SourceError> {
        self.fetch("stations", &self.config.stations_url).await
    }

    /// Fetch the artwork catalog.
    pub async fn fetch_artworks(&self) -> Result<Vec<RawArtwork>, SourceError> {
        self.fetch("artworks", &self.config.artworks_url).await
    }

    /// Fetch both catalogs concurrently.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, SourceError> {
        let (stations, artworks) =
            futures::try_join!(self.fetch_stations(), self.fetch_artworks())?;
        Ok(Snapshot::new(stations, artworks))
    }

    async fn fetch<T: DeserializeOwned>(&self, source_name: &str, url: &str) -> Result<T, SourceError> {
        debug!(source = source_name, url, "fetching catalog");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                url: url.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_json(source_name, &body)
    }
}
