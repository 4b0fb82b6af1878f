//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::domain::{Borough, InvalidBorough};
use crate::load::LoadReport;
use crate::query::{ArtworkQueries, ArtworkView, QueryError, StationArtView, StationQueries};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/artworks", get(list_artworks))
        .route("/artworks/:art_id", get(get_artwork))
        .route("/stations", get(list_stations))
        .route("/diagnostics", get(diagnostics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the NYC Subway Art API",
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse the optional borough filter. A blank value means no filter.
fn parse_borough(filter: &BoroughFilter) -> Result<Option<Borough>, AppError> {
    filter
        .borough
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .map(Borough::parse)
        .transpose()
        .map_err(AppError::from)
}

/// List artworks, optionally restricted to a borough.
async fn list_artworks(
    State(state): State<AppState>,
    Query(filter): Query<BoroughFilter>,
) -> Result<Json<Vec<ArtworkView>>, AppError> {
    let borough = parse_borough(&filter)?;
    Ok(Json(
        ArtworkQueries::new(&state.catalog).list_artworks(borough),
    ))
}

/// Get a single artwork by ID.
async fn get_artwork(
    State(state): State<AppState>,
    Path(art_id): Path<String>,
) -> Result<Json<ArtworkView>, AppError> {
    let view = ArtworkQueries::new(&state.catalog).get_artwork(&art_id)?;
    Ok(Json(view))
}

/// List stations that have art, optionally restricted to a borough.
async fn list_stations(
    State(state): State<AppState>,
    Query(filter): Query<BoroughFilter>,
) -> Result<Json<Vec<StationArtView>>, AppError> {
    let borough = parse_borough(&filter)?;
    Ok(Json(
        StationQueries::new(&state.catalog).list_stations_with_art(borough),
    ))
}

/// Load diagnostics for the catalog being served.
async fn diagnostics(State(state): State<AppState>) -> Json<LoadReport> {
    Json(state.catalog.report().clone())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<InvalidBorough> for AppError {
    fn from(e: InvalidBorough) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::ArtworkNotFound(_) => AppError::NotFound {
                message: "Artwork not found".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_borough_filter() {
        let filter = |b: Option<&str>| BoroughFilter {
            borough: b.map(str::to_string),
        };

        assert_eq!(parse_borough(&filter(None)).unwrap(), None);
        assert_eq!(parse_borough(&filter(Some(""))).unwrap(), None);
        assert_eq!(parse_borough(&filter(Some("Q"))).unwrap(), Some(Borough::Queens));
        assert_eq!(
            parse_borough(&filter(Some("Brooklyn"))).unwrap(),
            Some(Borough::Brooklyn)
        );
        assert!(matches!(
            parse_borough(&filter(Some("Hoboken"))),
            Err(AppError::BadRequest { .. })
        ));
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::from(QueryError::ArtworkNotFound("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
