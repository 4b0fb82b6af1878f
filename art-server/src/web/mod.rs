//! Web layer for the subway art API.
//!
//! Provides JSON endpoints over the joined catalog.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
