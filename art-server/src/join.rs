//! Joining artworks to the stations they are installed in.
//!
//! The artwork catalog only records a station *name* and a line, and names
//! are not unique: there are several "Broadway" and "86 St" stations on
//! different lines and in different boroughs. The line disambiguates. An
//! artwork is related to every station whose normalized name equals the
//! recorded name and which is served by the recorded line. There is no
//! fuzzy fallback: a line that doesn't serve any same-named station yields
//! no relation at all.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Artwork, Line, NameKey, Station};

/// A station matched to an artwork, and the line that matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationMatch {
    /// Position of the station in the catalog's station list.
    pub station: usize,
    pub line: Line,
}

/// Index from `(station name, line)` to the stations carrying both.
///
/// Stored as name → line → station positions so lookups borrow the key
/// instead of building a tuple.
#[derive(Debug, Default)]
pub struct JoinIndex {
    by_name: HashMap<NameKey, HashMap<Line, Vec<usize>>>,
}

impl JoinIndex {
    /// Build the index over a station list.
    ///
    /// Positions within each bucket follow station order.
    pub fn build(stations: &[Station]) -> Self {
        let mut by_name: HashMap<NameKey, HashMap<Line, Vec<usize>>> = HashMap::new();

        for (pos, station) in stations.iter().enumerate() {
            let lines = by_name.entry(station.name_key.clone()).or_default();
            for line in &station.lines {
                lines.entry(line.clone()).or_default().push(pos);
            }
        }

        Self { by_name }
    }

    /// Stations with this name served by this line.
    pub fn lookup(&self, name: &NameKey, line: &Line) -> &[usize] {
        self.by_name
            .get(name)
            .and_then(|lines| lines.get(line))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

/// The bidirectional artwork ↔ station association.
#[derive(Debug, Default)]
pub struct Join {
    /// For each artwork (by position), the stations it is related to,
    /// in station order.
    related: Vec<Vec<StationMatch>>,

    /// Artworks related to each station (by position), in artwork order.
    /// Only stations with at least one artwork have an entry.
    by_station: BTreeMap<usize, Vec<usize>>,
}

impl Join {
    /// Join artworks against stations.
    pub fn build(stations: &[Station], artworks: &[Artwork]) -> Self {
        let index = JoinIndex::build(stations);
        let mut related = Vec::with_capacity(artworks.len());
        let mut by_station: BTreeMap<usize, Vec<usize>> = BTreeMap::new();

        for (art_pos, artwork) in artworks.iter().enumerate() {
            let matches = match_artwork(&index, artwork);
            for m in &matches {
                by_station.entry(m.station).or_default().push(art_pos);
            }
            related.push(matches);
        }

        Self {
            related,
            by_station,
        }
    }

    /// Stations related to the artwork at `artwork` position.
    pub fn related(&self, artwork: usize) -> &[StationMatch] {
        self.related
            .get(artwork)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Artworks related to the station at `station` position.
    pub fn artworks_at(&self, station: usize) -> &[usize] {
        self.by_station
            .get(&station)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Positions of stations with at least one related artwork, ascending.
    pub fn stations_with_art(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_station.keys().copied()
    }

    /// Number of joinable artworks that matched no station.
    pub fn unmatched(&self, artworks: &[Artwork]) -> usize {
        artworks
            .iter()
            .zip(&self.related)
            .filter(|(artwork, related)| artwork.is_joinable() && related.is_empty())
            .count()
    }
}

/// Resolve one artwork's join key.
///
/// Each recorded line is looked up separately. A station matched by more
/// than one line appears once, reported with the first line that matched.
fn match_artwork(index: &JoinIndex, artwork: &Artwork) -> Vec<StationMatch> {
    let Some(key) = &artwork.join_key else {
        return Vec::new();
    };

    let mut matches: Vec<StationMatch> = Vec::new();
    for line in &key.lines {
        for &station in index.lookup(&key.name, line) {
            if matches.iter().all(|m| m.station != station) {
                matches.push(StationMatch {
                    station,
                    line: line.clone(),
                });
            }
        }
    }

    matches.sort_by_key(|m| m.station);
    matches
}
