//! Station entities.

use std::fmt;

use serde::Serialize;

use super::borough::Borough;
use super::key::{Line, NameKey};

/// Stable identifier of a station record.
///
/// Identifiers are opaque strings; the only guarantee is that they are
/// non-blank. Uniqueness is enforced by the station loader.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station ID from a raw string. Returns `None` if blank.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(StationId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A physical subway station.
///
/// Several stations may share a display name (there are many "Broadway"
/// stations), so `name` is never used as an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,

    /// Display name, as given by the station catalog.
    pub name: String,

    /// Normalized name used for joining.
    pub name_key: NameKey,

    pub latitude: f64,
    pub longitude: f64,
    pub borough: Borough,

    /// Lines serving this station, in catalog order, without duplicates.
    /// Never empty.
    pub lines: Vec<Line>,
}
