//! Artwork queries.

use crate::catalog::ArtCatalog;
use crate::domain::Borough;

use super::error::QueryError;
use super::views::ArtworkView;

/// Read-only artwork queries over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ArtworkQueries<'a> {
    catalog: &'a ArtCatalog,
}

impl<'a> ArtworkQueries<'a> {
    pub fn new(catalog: &'a ArtCatalog) -> Self {
        Self { catalog }
    }

    /// List artworks in load order.
    ///
    /// With a borough, only artworks related to at least one station in
    /// that borough are returned, which leaves out every unjoined artwork.
    pub fn list_artworks(&self, borough: Option<Borough>) -> Vec<ArtworkView> {
        (0..self.catalog.artworks().len())
            .filter(|&pos| match borough {
                None => true,
                Some(b) => self
                    .catalog
                    .related_stations(pos)
                    .any(|r| r.station.borough == b),
            })
            .map(|pos| ArtworkView::build(self.catalog, pos))
            .collect()
    }

    /// Get one artwork by its exact identifier.
    pub fn get_artwork(&self, art_id: &str) -> Result<ArtworkView, QueryError> {
        let pos = self
            .catalog
            .artwork_position(art_id)
            .ok_or_else(|| QueryError::ArtworkNotFound(art_id.to_string()))?;
        Ok(ArtworkView::build(self.catalog, pos))
    }
}
