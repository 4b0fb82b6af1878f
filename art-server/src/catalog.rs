//! The joined, immutable art catalog.
//!
//! An [`ArtCatalog`] is built once from a [`Snapshot`] and never mutated.
//! Query components borrow it; serving a fresh snapshot means building a
//! second catalog and handing that out instead.

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::{ArtId, Artwork, Line, Station};
use crate::join::Join;
use crate::load::{LoadReport, load_artworks, load_stations};
use crate::sources::Snapshot;

/// A station related to an artwork, with the line that related them.
#[derive(Debug, Clone, Copy)]
pub struct RelatedStation<'a> {
    pub station: &'a Station,
    pub line: &'a Line,
}

/// Stations, artworks and the join between them.
#[derive(Debug)]
pub struct ArtCatalog {
    stations: Vec<Station>,
    artworks: Vec<Artwork>,
    artwork_index: HashMap<ArtId, usize>,
    join: Join,
    report: LoadReport,
}

impl ArtCatalog {
    /// Load, normalize and join a snapshot.
    pub fn build(snapshot: &Snapshot) -> Self {
        let loaded_stations = load_stations(&snapshot.stations);
        let loaded_artworks = load_artworks(&snapshot.artworks);

        let stations = loaded_stations.stations;
        let artworks = loaded_artworks.artworks;
        let join = Join::build(&stations, &artworks);

        let report = LoadReport {
            loaded_at: Utc::now(),
            stations: loaded_stations.report,
            artworks: loaded_artworks.report,
            unjoinable_artworks: loaded_artworks.unjoinable,
            unmatched_artworks: join.unmatched(&artworks),
        };

        let artwork_index = artworks
            .iter()
            .enumerate()
            .map(|(pos, a)| (a.id.clone(), pos))
            .collect();

        Self {
            stations,
            artworks,
            artwork_index,
            join,
            report,
        }
    }

    /// All stations, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All artworks, in load order.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Position of an artwork by exact ID.
    pub fn artwork_position(&self, id: &str) -> Option<usize> {
        self.artwork_index.get(id).copied()
    }

    /// Look up an artwork by exact ID.
    pub fn artwork(&self, id: &str) -> Option<&Artwork> {
        self.artwork_position(id).map(|pos| &self.artworks[pos])
    }

    /// Stations related to the artwork at `pos`, in station order.
    pub fn related_stations(&self, pos: usize) -> impl Iterator<Item = RelatedStation<'_>> + '_ {
        self.join.related(pos).iter().map(|m| RelatedStation {
            station: &self.stations[m.station],
            line: &m.line,
        })
    }

    /// Stations with at least one related artwork, with their positions,
    /// in station order.
    pub fn stations_with_art(&self) -> impl Iterator<Item = (usize, &Station)> + '_ {
        self.join
            .stations_with_art()
            .map(|pos| (pos, &self.stations[pos]))
    }

    /// Artworks related to the station at `pos`, in artwork order.
    pub fn artworks_at(&self, pos: usize) -> impl Iterator<Item = &Artwork> + '_ {
        self.join
            .artworks_at(pos)
            .iter()
            .map(|&art| &self.artworks[art])
    }

    /// Diagnostics from building this catalog.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"properties": {"station_id": "S1", "stop_name": "Jay St", "daytime_routes": "A C",
                            "borough": "Bk", "gtfs_latitude": "40.692", "gtfs_longitude": "-73.987"}},
            {"properties": {"station_id": "S2", "stop_name": "Nowhere", "daytime_routes": "",
                            "borough": "Bk", "gtfs_latitude": "40.0", "gtfs_longitude": "-73.0"}}
        ]
    }"#;

    const ARTWORKS: &str = r#"[
        {"id": "ART1", "station_name": "Jay St", "line": "A", "art_title": "Departures"},
        {"id": "ART2", "station_name": "Jay St", "line": "F"},
        {"id": "ART3", "station_name": "Jay St"},
        {"station_name": "Jay St", "line": "A"}
    ]"#;

    fn catalog() -> ArtCatalog {
        ArtCatalog::build(&Snapshot::from_json(STATIONS, ARTWORKS).unwrap())
    }

    #[test]
    fn builds_and_indexes() {
        let catalog = catalog();
        assert_eq!(catalog.stations().len(), 1);
        assert_eq!(catalog.artworks().len(), 3);
        assert_eq!(catalog.stations()[0].id.as_str(), "S1");
        assert_eq!(catalog.artwork("ART1").unwrap().title.as_deref(), Some("Departures"));
        assert_eq!(catalog.artwork_position("ART3"), Some(2));
        assert!(catalog.artwork("art1").is_none());
    }

    #[test]
    fn related_stations_resolve_to_entities() {
        let catalog = catalog();
        let related: Vec<_> = catalog.related_stations(0).collect();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].station.id.as_str(), "S1");
        assert_eq!(related[0].line.as_str(), "A");

        assert_eq!(catalog.related_stations(1).count(), 0);
        assert_eq!(catalog.related_stations(2).count(), 0);
    }

    #[test]
    fn artworks_at_station() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.artworks_at(0).map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["ART1"]);

        let with_art: Vec<_> = catalog
            .stations_with_art()
            .map(|(pos, s)| (pos, s.id.as_str()))
            .collect();
        assert_eq!(with_art, vec![(0, "S1")]);
    }

    #[test]
    fn report_counts() {
        let catalog = catalog();
        let report = catalog.report();
        assert_eq!(report.stations.loaded, 1);
        assert_eq!(report.stations.skipped.get("no_lines"), Some(&1));
        assert_eq!(report.artworks.loaded, 3);
        assert_eq!(report.artworks.skipped.get("missing_id"), Some(&1));
        assert_eq!(report.unjoinable_artworks, 1);
        assert_eq!(report.unmatched_artworks, 1);
    }

    #[test]
    fn empty_snapshot() {
        let catalog = ArtCatalog::build(&Snapshot::default());
        assert!(catalog.stations().is_empty());
        assert!(catalog.artworks().is_empty());
        assert_eq!(catalog.report().stations.records, 0);
    }
}
