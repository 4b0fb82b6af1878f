//! Station loader.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Borough, Line, MalformedRecord, NameKey, Station, StationId};
use crate::sources::raw::{StationCollection, StationFeature, text, verbatim};

use super::report::{LoadIssue, SourceReport};

/// Stations loaded from the station catalog, in catalog order.
#[derive(Debug, Clone)]
pub struct LoadedStations {
    pub stations: Vec<Station>,
    pub report: SourceReport,
}

/// Normalize the station catalog into [`Station`] entities.
///
/// Malformed features are skipped and recorded in the report. When two
/// features share a `station_id`, the first one loaded wins.
pub fn load_stations(collection: &StationCollection) -> LoadedStations {
    let mut stations = Vec::with_capacity(collection.features.len());
    let mut seen: HashSet<StationId> = HashSet::new();
    let mut report = SourceReport::default();

    for (index, feature) in collection.features.iter().enumerate() {
        let result = station_from_feature(feature).and_then(|station| {
            if seen.contains(&station.id) {
                Err(MalformedRecord::DuplicateId(station.id.to_string()))
            } else {
                Ok(station)
            }
        });

        match result {
            Ok(station) => {
                seen.insert(station.id.clone());
                stations.push(station);
                report.record_loaded();
            }
            Err(reason) => {
                let id = verbatim(&feature.properties.station_id);
                debug!(index, ?id, %reason, "skipping station record");
                report.record_skipped(LoadIssue { index, id, reason });
            }
        }
    }

    LoadedStations { stations, report }
}

/// Build a single station, or say why it can't be built.
fn station_from_feature(feature: &StationFeature) -> Result<Station, MalformedRecord> {
    let props = &feature.properties;

    let id = verbatim(&props.station_id)
        .and_then(|raw| StationId::new(&raw))
        .ok_or(MalformedRecord::MissingId)?;

    let name = text(&props.stop_name).ok_or(MalformedRecord::MissingName)?;
    let name_key = NameKey::new(&name).ok_or(MalformedRecord::MissingName)?;

    let (latitude, longitude) = feature
        .coordinates()
        .ok_or(MalformedRecord::MissingCoordinates)?;
    if !valid_position(latitude, longitude) {
        return Err(MalformedRecord::InvalidCoordinates {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        });
    }

    let raw_borough = text(&props.borough).unwrap_or_default();
    let borough =
        Borough::parse(&raw_borough).map_err(|_| MalformedRecord::UnknownBorough(raw_borough))?;

    let routes = text(&props.daytime_routes).unwrap_or_default();
    let lines =
        Line::parse_list(&routes).map_err(|_| MalformedRecord::InvalidLines(routes))?;
    if lines.is_empty() {
        return Err(MalformedRecord::NoLines);
    }

    Ok(Station {
        id,
        name,
        name_key,
        latitude,
        longitude,
        borough,
        lines,
    })
}

fn valid_position(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sources::raw::{Scalar, StationProperties};
    use proptest::prelude::*;

    fn feature(id: String) -> StationFeature {
        StationFeature {
            properties: StationProperties {
                station_id: Some(Scalar::Text(id)),
                stop_name: Some(Scalar::from("Broadway")),
                daytime_routes: Some(Scalar::from("N W")),
                borough: Some(Scalar::from("Q")),
                gtfs_latitude: Some(Scalar::from("40.76")),
                gtfs_longitude: Some(Scalar::from("-73.92")),
            },
            geometry: None,
        }
    }

    proptest! {
        /// Loaded station IDs are always unique
        #[test]
        fn ids_unique(ids in proptest::collection::vec("[0-9]{1,2}", 0..40)) {
            let features = ids.iter().cloned().map(feature).collect();
            let loaded = load_stations(&StationCollection { features });

            let distinct: HashSet<&str> = loaded.stations.iter().map(|s| s.id.as_str()).collect();
            prop_assert_eq!(distinct.len(), loaded.stations.len());

            let expected: HashSet<&str> = ids.iter().map(String::as_str).collect();
            prop_assert_eq!(distinct, expected);
            prop_assert_eq!(loaded.report.records, ids.len());
        }
    }
}
