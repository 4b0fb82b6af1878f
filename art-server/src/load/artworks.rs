//! Artwork loader.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{ArtId, Artwork, JoinKey, MalformedRecord};
use crate::sources::raw::{RawArtwork, text, verbatim};

use super::report::{LoadIssue, SourceReport};

/// Artworks loaded from the artwork catalog, in catalog order.
#[derive(Debug, Clone)]
pub struct LoadedArtworks {
    pub artworks: Vec<Artwork>,
    pub report: SourceReport,

    /// How many loaded artworks have no usable join key.
    pub unjoinable: usize,
}

/// Normalize the artwork catalog into [`Artwork`] entities.
///
/// Only a missing or repeated identifier causes a record to be skipped.
/// A record without a usable station name or line is still loaded, so it
/// stays retrievable by ID, but carries no join key.
pub fn load_artworks(records: &[RawArtwork]) -> LoadedArtworks {
    let mut artworks = Vec::with_capacity(records.len());
    let mut seen: HashSet<ArtId> = HashSet::new();
    let mut report = SourceReport::default();
    let mut unjoinable = 0;

    for (index, record) in records.iter().enumerate() {
        let Some(id) = verbatim(&record.id).and_then(|raw| ArtId::new(&raw)) else {
            debug!(index, "skipping artwork without identifier");
            report.record_skipped(LoadIssue {
                index,
                id: None,
                reason: MalformedRecord::MissingId,
            });
            continue;
        };

        if seen.contains(&id) {
            debug!(index, %id, "skipping duplicate artwork");
            report.record_skipped(LoadIssue {
                index,
                id: Some(id.to_string()),
                reason: MalformedRecord::DuplicateId(id.to_string()),
            });
            continue;
        }

        let artwork = artwork_from_record(id, record);
        if !artwork.is_joinable() {
            debug!(index, id = %artwork.id, "artwork has no usable join key");
            unjoinable += 1;
        }

        seen.insert(artwork.id.clone());
        artworks.push(artwork);
        report.record_loaded();
    }

    LoadedArtworks {
        artworks,
        report,
        unjoinable,
    }
}

fn artwork_from_record(id: ArtId, record: &RawArtwork) -> Artwork {
    let station_name = text(&record.station_name);
    let line = text(&record.line);

    let join_key = match (&station_name, &line) {
        (Some(name), Some(line)) => JoinKey::new(name, line),
        _ => None,
    };

    Artwork {
        id,
        station_name,
        line,
        artist: text(&record.artist),
        title: text(&record.art_title),
        date: text(&record.art_date),
        material: text(&record.art_material),
        description: text(&record.art_description),
        image_url: record.art_image_link.as_ref().and_then(|link| link.url()),
        join_key,
    }
}
