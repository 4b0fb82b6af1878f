//! Station queries.

use crate::catalog::ArtCatalog;
use crate::domain::Borough;

use super::views::{ArtworkSummary, StationArtView};

/// Read-only station queries over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct StationQueries<'a> {
    catalog: &'a ArtCatalog,
}

impl<'a> StationQueries<'a> {
    pub fn new(catalog: &'a ArtCatalog) -> Self {
        Self { catalog }
    }

    /// List stations that have at least one related artwork, in load order,
    /// each with a summary of its artworks.
    pub fn list_stations_with_art(&self, borough: Option<Borough>) -> Vec<StationArtView> {
        self.catalog
            .stations_with_art()
            .filter(|(_, station)| borough.is_none_or(|b| station.borough == b))
            .map(|(pos, station)| {
                let artworks: Vec<ArtworkSummary> = self
                    .catalog
                    .artworks_at(pos)
                    .map(ArtworkSummary::from_artwork)
                    .collect();
                StationArtView::new(station, artworks)
            })
            .collect()
    }
}
