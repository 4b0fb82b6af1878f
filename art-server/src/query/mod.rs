//! Read-only queries over the joined catalog.
//!
//! Every query is a pure function of an [`ArtCatalog`](crate::catalog::ArtCatalog)
//! plus an optional borough filter or identifier, so any number of callers
//! can run them concurrently against a shared catalog.

mod artworks;
mod error;
mod stations;
mod views;

pub use artworks::ArtworkQueries;
pub use error::QueryError;
pub use stations::StationQueries;
pub use views::{ArtworkSummary, ArtworkView, ImageLinkView, RelatedStationView, StationArtView};
