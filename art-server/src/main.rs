use art_server::catalog::ArtCatalog;
use art_server::config::{ServerConfig, SourceConfig};
use art_server::sources::{Snapshot, SourceClient, SourceError};
use art_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(2);
    });

    // Load and join once; the catalog is read-only from here on
    let snapshot = load_snapshot(&config)
        .await
        .expect("Failed to load source catalogs");
    let catalog = ArtCatalog::build(&snapshot);
    catalog.report().log_summary();

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr = config.addr;
    info!("Subway Art API listening on http://{addr}");
    info!("  GET  /artworks[?borough=]  - List artworks");
    info!("  GET  /artworks/:art_id     - Get one artwork");
    info!("  GET  /stations[?borough=]  - Stations with art");
    info!("  GET  /diagnostics          - Load report");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

/// Get the raw catalogs from local files or the network.
async fn load_snapshot(config: &ServerConfig) -> Result<Snapshot, SourceError> {
    if let SourceConfig::Files { stations, artworks } = &config.source {
        info!(?stations, ?artworks, "reading catalogs from files");
        return Snapshot::from_files(stations, artworks);
    }

    let client_config = config.client_config().unwrap_or_default();
    info!(
        stations = %client_config.stations_url,
        artworks = %client_config.artworks_url,
        "fetching catalogs"
    );
    SourceClient::new(client_config)?.fetch_snapshot().await
}
