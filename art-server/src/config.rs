//! Server configuration.
//!
//! Read from `SUBWAY_ART_*` environment variables, with defaults for
//! everything.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::sources::{DEFAULT_ARTWORKS_URL, DEFAULT_STATIONS_URL, SourceClientConfig};

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Only one of the two snapshot files was given
    #[error("SUBWAY_ART_STATIONS_FILE and SUBWAY_ART_ARTWORKS_FILE must be set together")]
    PartialFiles,
}

/// Where the raw catalogs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Fetch over HTTP.
    Remote {
        stations_url: String,
        artworks_url: String,
        timeout_secs: u64,
    },

    /// Read local files.
    Files {
        stations: PathBuf,
        artworks: PathBuf,
    },
}

/// Configuration for the art server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    pub source: SourceConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("SUBWAY_ART_ADDR") {
            config.addr = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: "SUBWAY_ART_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        let stations_file = get("SUBWAY_ART_STATIONS_FILE");
        let artworks_file = get("SUBWAY_ART_ARTWORKS_FILE");
        match (stations_file, artworks_file) {
            (Some(stations), Some(artworks)) => {
                config.source = SourceConfig::Files {
                    stations: stations.into(),
                    artworks: artworks.into(),
                };
            }
            (None, None) => {
                let timeout_secs = match get("SUBWAY_ART_TIMEOUT_SECS") {
                    Some(value) => parse_secs("SUBWAY_ART_TIMEOUT_SECS", &value)?,
                    None => SourceClientConfig::default().timeout_secs,
                };
                config.source = SourceConfig::Remote {
                    stations_url: get("SUBWAY_ART_STATIONS_URL")
                        .unwrap_or_else(|| DEFAULT_STATIONS_URL.to_string()),
                    artworks_url: get("SUBWAY_ART_ARTWORKS_URL")
                        .unwrap_or_else(|| DEFAULT_ARTWORKS_URL.to_string()),
                    timeout_secs,
                };
            }
            _ => return Err(ConfigError::PartialFiles),
        }

        Ok(config)
    }

    /// Client config for remote sources, if the source is remote.
    pub fn client_config(&self) -> Option<SourceClientConfig> {
        match &self.source {
            SourceConfig::Remote {
                stations_url,
                artworks_url,
                timeout_secs,
            } => Some(
                SourceClientConfig::new()
                    .with_urls(stations_url.clone(), artworks_url.clone())
                    .with_timeout_secs(*timeout_secs),
            ),
            SourceConfig::Files { .. } => None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        let client = SourceClientConfig::default();
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            source: SourceConfig::Remote {
                stations_url: client.stations_url,
                artworks_url: client.artworks_url,
                timeout_secs: client.timeout_secs,
            },
        }
    }
}

fn parse_secs(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
