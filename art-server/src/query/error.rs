//! Query error types.

/// Errors returned by catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No artwork has this exact identifier
    #[error("artwork {0} not found")]
    ArtworkNotFound(String),
}
