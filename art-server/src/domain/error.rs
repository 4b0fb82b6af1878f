//! Domain error types.
//!
//! These describe why a raw source record could not become an entity.
//! They are recovered from during loading and never surface from queries.

/// A raw record lacks something an entity needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecord {
    /// No usable identifier
    #[error("missing identifier")]
    MissingId,

    /// No usable station name
    #[error("missing station name")]
    MissingName,

    /// Latitude or longitude absent from both properties and geometry
    #[error("missing coordinates")]
    MissingCoordinates,

    /// Coordinates present but not a valid position
    #[error("invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: String, longitude: String },

    /// Borough absent or not one of the five
    #[error("unknown borough: {0:?}")]
    UnknownBorough(String),

    /// No serving line tokens
    #[error("no serving lines")]
    NoLines,

    /// Serving lines present but one of the tokens is malformed
    #[error("invalid serving lines: {0:?}")]
    InvalidLines(String),

    /// An earlier record already used this identifier
    #[error("duplicate identifier {0}")]
    DuplicateId(String),
}

impl MalformedRecord {
    /// Short label used to group diagnostics by reason.
    pub fn label(&self) -> &'static str {
        match self {
            MalformedRecord::MissingId => "missing_id",
            MalformedRecord::MissingName => "missing_name",
            MalformedRecord::MissingCoordinates => "missing_coordinates",
            MalformedRecord::InvalidCoordinates { .. } => "invalid_coordinates",
            MalformedRecord::UnknownBorough(_) => "unknown_borough",
            MalformedRecord::NoLines => "no_lines",
            MalformedRecord::InvalidLines(_) => "invalid_lines",
            MalformedRecord::DuplicateId(_) => "duplicate_id",
        }
    }
}
