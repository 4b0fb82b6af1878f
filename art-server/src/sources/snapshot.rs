//! A pair of raw catalog documents taken at one point in time.

use std::path::Path;

use super::error::SourceError;
use super::raw::{RawArtwork, StationCollection};

/// Raw station and artwork records, as handed to the loaders.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub stations: StationCollection,
    pub artworks: Vec<RawArtwork>,
}

impl Snapshot {
    pub fn new(stations: StationCollection, artworks: Vec<RawArtwork>) -> Self {
        Self { stations, artworks }
    }

    /// Parse both catalogs from their JSON text.
    pub fn from_json(stations: &str, artworks: &str) -> Result<Self, SourceError> {
        Ok(Self {
            stations: parse_json("stations", stations)?,
            artworks: parse_json("artworks", artworks)?,
        })
    }

    /// Read both catalogs from local files.
    ///
    /// The station file is GeoJSON; the artwork file is a JSON array.
    pub fn from_files(
        stations_path: impl AsRef<Path>,
        artworks_path: impl AsRef<Path>,
    ) -> Result<Self, SourceError> {
        let stations = read_file(stations_path.as_ref())?;
        let artworks = read_file(artworks_path.as_ref())?;
        Self::from_json(&stations, &artworks)
    }
}

pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(
    source_name: &str,
    body: &str,
) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Json {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
