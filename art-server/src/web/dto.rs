//! Data transfer objects for web requests and responses.
//!
//! Query results are serialized straight from the views in
//! [`crate::query`]; only request parameters and envelopes live here.

use serde::{Deserialize, Serialize};

/// Optional borough filter for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct BoroughFilter {
    /// Borough code (`M`, `Bk`, `Bx`, `Q`, `SI`) or full name
    pub borough: Option<String>,
}

/// Response for the root endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
