//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::ArtCatalog;

/// Shared application state.
///
/// The catalog is immutable after build, so handlers read it without any
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ArtCatalog>,
}

impl AppState {
    pub fn new(catalog: ArtCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
