//! Source snapshot error types.

use std::path::PathBuf;

/// Errors that can occur when fetching or reading the source catalogs.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned an error status
    #[error("API error {status} from {url}: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    /// Failed to parse a catalog document
    #[error("JSON parse error in {source_name}: {message}")]
    Json {
        source_name: String,
        message: String,
    },

    /// Failed to read a local snapshot file
    #[error("failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },
}
