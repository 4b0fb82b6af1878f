//! Loaders turning raw catalog records into domain entities.
//!
//! Loading never fails as a whole: malformed records are skipped (or, for
//! artworks without a join key, loaded as unjoinable) and counted in a
//! [`SourceReport`].

mod artworks;
mod report;
mod stations;

pub use artworks::{LoadedArtworks, load_artworks};
pub use report::{LoadIssue, LoadReport, SourceReport};
pub use stations::{LoadedStations, load_stations};
