//! Raw catalog ingestion.
//!
//! Fetches the station and artwork catalogs from the open-data portal (or
//! reads them from local files) and hands them to the loaders as a
//! [`Snapshot`]. Nothing here interprets the records.

mod client;
mod error;
pub mod raw;
mod snapshot;

pub use client::{DEFAULT_ARTWORKS_URL, DEFAULT_STATIONS_URL, SourceClient, SourceClientConfig};
pub use error::SourceError;
pub use snapshot::Snapshot;
