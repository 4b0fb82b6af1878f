//! Artwork entities.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::key::{Line, NameKey};

/// Stable identifier of an artwork record.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArtId(String);

impl ArtId {
    /// Create an artwork ID from a raw string. Returns `None` if blank.
    ///
    /// The string is kept as given, surrounding whitespace included, so that
    /// lookups match the source identifier exactly.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(ArtId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ArtId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ArtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtId({})", self.0)
    }
}

impl fmt::Display for ArtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `(station name, line)` pair an artwork is joined on.
///
/// The artwork catalog sometimes records several lines for one piece
/// (`"A,C,E"`); each of them is a separate key against the station index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinKey {
    pub name: NameKey,

    /// Never empty.
    pub lines: Vec<Line>,
}

impl JoinKey {
    /// Build a join key from the raw station name and line fields.
    ///
    /// Returns `None` when the name is blank, the line field holds no
    /// tokens, or any of its tokens is malformed.
    pub fn new(station_name: &str, line: &str) -> Option<Self> {
        let name = NameKey::new(station_name)?;
        let lines = Line::parse_list(line).ok()?;
        if lines.is_empty() {
            return None;
        }
        Some(Self { name, lines })
    }
}

/// A permanent artwork installed in the subway.
///
/// Descriptive fields are `None` when the catalog has nothing for them;
/// they are never filled with placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub id: ArtId,

    /// Station name as recorded by the artwork catalog.
    pub station_name: Option<String>,

    /// Line field as recorded by the artwork catalog.
    pub line: Option<String>,

    pub artist: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub material: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,

    /// `None` when the record cannot be joined to any station.
    pub join_key: Option<JoinKey>,
}

impl Artwork {
    /// Whether this artwork carries a usable join key.
    pub fn is_joinable(&self) -> bool {
        self.join_key.is_some()
    }
}
