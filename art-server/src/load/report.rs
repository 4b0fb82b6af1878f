//! Load-time diagnostics.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::MalformedRecord;

/// A record that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadIssue {
    /// Position of the record in its source.
    pub index: usize,

    /// The record's identifier, when it had one.
    pub id: Option<String>,

    #[serde(serialize_with = "serialize_reason")]
    pub reason: MalformedRecord,
}

fn serialize_reason<S: serde::Serializer>(
    reason: &MalformedRecord,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Counts for one source catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceReport {
    /// Records seen in the source.
    pub records: usize,

    /// Records that became entities.
    pub loaded: usize,

    /// Skipped records per reason label.
    pub skipped: BTreeMap<&'static str, usize>,

    pub issues: Vec<LoadIssue>,
}

impl SourceReport {
    pub(crate) fn record_loaded(&mut self) {
        self.records += 1;
        self.loaded += 1;
    }

    pub(crate) fn record_skipped(&mut self, issue: LoadIssue) {
        self.records += 1;
        *self.skipped.entry(issue.reason.label()).or_default() += 1;
        self.issues.push(issue);
    }

    /// Total number of skipped records.
    pub fn skipped_total(&self) -> usize {
        self.issues.len()
    }
}

/// Diagnostics for one build of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub loaded_at: DateTime<Utc>,
    pub stations: SourceReport,
    pub artworks: SourceReport,

    /// Artworks loaded without a usable join key.
    pub unjoinable_artworks: usize,

    /// Artworks with a join key that matched no station.
    pub unmatched_artworks: usize,
}

impl LoadReport {
    /// Log a summary of the build.
    pub fn log_summary(&self) {
        info!(
            stations = self.stations.loaded,
            artworks = self.artworks.loaded,
            unjoinable = self.unjoinable_artworks,
            unmatched = self.unmatched_artworks,
            "catalog loaded"
        );

        for (source, report) in [("stations", &self.stations), ("artworks", &self.artworks)] {
            for (reason, count) in &report.skipped {
                warn!(source, reason, count, "skipped records");
            }
        }
    }
}
