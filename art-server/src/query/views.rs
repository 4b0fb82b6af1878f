//! Query result views.
//!
//! Plain serializable structures; field names match what the front-end
//! map application expects.

use serde::Serialize;

use crate::catalog::{ArtCatalog, RelatedStation};
use crate::domain::{Artwork, Borough, Station};

/// Image link wrapper. Always present; `url` is `None` when there is no image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageLinkView {
    pub url: Option<String>,
}

impl ImageLinkView {
    fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            url: artwork.image_url.clone(),
        }
    }
}

/// A station an artwork is related to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedStationView {
    pub station_id: String,

    /// The line that matched the artwork to this station.
    pub line: String,

    pub borough: Borough,
}

impl RelatedStationView {
    fn from_related(related: &RelatedStation<'_>) -> Self {
        Self {
            station_id: related.station.id.to_string(),
            line: related.line.to_string(),
            borough: related.station.borough,
        }
    }
}

/// The full view of an artwork.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkView {
    pub art_id: String,
    pub station_name: Option<String>,
    pub artist: Option<String>,
    pub art_title: Option<String>,
    pub art_date: Option<String>,
    pub art_material: Option<String>,
    pub art_description: Option<String>,
    pub art_image_link: ImageLinkView,

    /// Position of the first related station; absent when unjoined.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub related_stations: Vec<RelatedStationView>,
}

impl ArtworkView {
    /// Build the view of the artwork at `pos` in the catalog.
    pub(crate) fn build(catalog: &ArtCatalog, pos: usize) -> Self {
        let artwork = &catalog.artworks()[pos];
        let related: Vec<RelatedStation<'_>> = catalog.related_stations(pos).collect();
        let first = related.first().map(|r| r.station);

        Self {
            art_id: artwork.id.to_string(),
            station_name: artwork.station_name.clone(),
            artist: artwork.artist.clone(),
            art_title: artwork.title.clone(),
            art_date: artwork.date.clone(),
            art_material: artwork.material.clone(),
            art_description: artwork.description.clone(),
            art_image_link: ImageLinkView::from_artwork(artwork),
            latitude: first.map(|s| s.latitude),
            longitude: first.map(|s| s.longitude),
            related_stations: related.iter().map(RelatedStationView::from_related).collect(),
        }
    }
}

/// The reduced artwork view nested in station listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkSummary {
    pub art_id: String,
    pub art_title: Option<String>,
    pub artist: Option<String>,
    pub art_description: Option<String>,
    pub art_image_link: ImageLinkView,
}

impl ArtworkSummary {
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            art_id: artwork.id.to_string(),
            art_title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            art_description: artwork.description.clone(),
            art_image_link: ImageLinkView::from_artwork(artwork),
        }
    }
}

/// A station annotated with its artworks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationArtView {
    pub station_id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub borough: Borough,
    pub lines: Vec<String>,

    /// Always equal to `artworks.len()`, and at least 1.
    pub artwork_count: usize,
    pub artworks: Vec<ArtworkSummary>,
}

impl StationArtView {
    pub(crate) fn new(station: &Station, artworks: Vec<ArtworkSummary>) -> Self {
        Self {
            station_id: station.id.to_string(),
            station_name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            borough: station.borough,
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
            artwork_count: artworks.len(),
            artworks,
        }
    }
}
