//! Domain types for the subway art API.
//!
//! This module contains the normalized entities built from the raw station
//! and artwork catalogs. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod artwork;
mod borough;
mod error;
mod key;
mod station;

pub use artwork::{ArtId, Artwork, JoinKey};
pub use borough::{Borough, InvalidBorough};
pub use error::MalformedRecord;
pub use key::{InvalidLine, Line, NameKey};
pub use station::{Station, StationId};
