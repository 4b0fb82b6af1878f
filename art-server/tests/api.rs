//! End-to-end tests of the HTTP surface against an in-memory catalog.

use art_server::catalog::ArtCatalog;
use art_server::sources::Snapshot;
use art_server::web::{AppState, create_router};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

const STATIONS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"station_id": "1", "stop_name": "Test Station", "daytime_routes": "A",
                           "borough": "M", "gtfs_latitude": "40.7", "gtfs_longitude": "-74.0"},
            "geometry": {"type": "Point", "coordinates": [-74.0, 40.7]}
        },
        {
            "type": "Feature",
            "properties": {"station_id": "S1", "stop_name": "Jay St", "daytime_routes": "A C",
                           "borough": "Bk", "gtfs_latitude": "40.692", "gtfs_longitude": "-73.987"}
        },
        {
            "type": "Feature",
            "properties": {"station_id": "Q1", "stop_name": "Broadway", "daytime_routes": "N W",
                           "borough": "Q", "gtfs_latitude": "40.761", "gtfs_longitude": "-73.925"}
        },
        {
            "type": "Feature",
            "properties": {"station_id": "K1", "stop_name": "Broadway", "daytime_routes": "G",
                           "borough": "Bk", "gtfs_latitude": "40.706", "gtfs_longitude": "-73.950"}
        }
    ]
}"#;

const ARTWORKS: &str = r#"[
    {"id": "1", "station_name": "Test Station", "line": "A", "artist": "Test Artist 1",
     "art_title": "Test Artwork 1", "art_image_link": {"url": "https://example.com/image1.jpg"}},
    {"id": "2", "station_name": "Test Station", "line": "A", "artist": "Test Artist 2",
     "art_title": "Test Artwork 2", "art_image_link": {"url": "https://example.com/image2.jpg"}},
    {"id": "ART1", "station_name": "Jay St", "line": "A"},
    {"id": "ART2", "station_name": "Jay St", "line": "F"},
    {"id": "ART3", "station_name": "Broadway", "line": "N"},
    {"id": "ART4", "station_name": "Broadway", "line": "G"},
    {"id": "ART5", "station_name": "Nowhere"}
]"#;

fn app() -> Router {
    let snapshot = Snapshot::from_json(STATIONS, ARTWORKS).unwrap();
    create_router(AppState::new(ArtCatalog::build(&snapshot)))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn ids(json: &Value, field: &str) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|v| v[field].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn root_welcomes() {
    let (status, json) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"message": "Welcome to the NYC Subway Art API"}));
}

#[tokio::test]
async fn list_artworks_returns_all() {
    let (status, json) = get("/artworks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&json, "art_id"),
        vec!["1", "2", "ART1", "ART2", "ART3", "ART4", "ART5"]
    );

    for artwork in json.as_array().unwrap() {
        assert!(artwork["art_image_link"].is_object());
        assert!(artwork.get("latitude").is_some());
        assert!(artwork.get("longitude").is_some());
    }
}

#[tokio::test]
async fn list_artworks_by_borough() {
    let (status, json) = get("/artworks?borough=M").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json, "art_id"), vec!["1", "2"]);

    let (_, json) = get("/artworks?borough=Brooklyn").await;
    assert_eq!(ids(&json, "art_id"), vec!["ART1", "ART4"]);
    for artwork in json.as_array().unwrap() {
        let related = artwork["related_stations"].as_array().unwrap();
        assert!(related.iter().any(|s| s["borough"] == "Brooklyn"));
    }
}

#[tokio::test]
async fn blank_borough_is_no_filter() {
    let (status, json) = get("/artworks?borough=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn unknown_borough_is_bad_request() {
    let (status, json) = get("/artworks?borough=Hoboken").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Hoboken"));

    let (status, _) = get("/stations?borough=Hoboken").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_artwork_by_id() {
    let (status, json) = get("/artworks/ART1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["art_id"], "ART1");
    assert_eq!(
        json["related_stations"],
        serde_json::json!([{"station_id": "S1", "line": "A", "borough": "Brooklyn"}])
    );
    assert_eq!(json["latitude"], 40.692);
}

#[tokio::test]
async fn unserved_line_yields_no_relations() {
    let (status, json) = get("/artworks/ART2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["related_stations"], serde_json::json!([]));
    assert!(json["latitude"].is_null());
}

#[tokio::test]
async fn get_artwork_not_found() {
    let (status, json) = get("/artworks/nonexistent_id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"error": "Artwork not found"}));
}

#[tokio::test]
async fn stations_with_art() {
    let (status, json) = get("/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json, "station_id"), vec!["1", "S1", "Q1", "K1"]);

    for station in json.as_array().unwrap() {
        let count = station["artwork_count"].as_u64().unwrap();
        assert!(count >= 1);
        assert_eq!(count as usize, station["artworks"].as_array().unwrap().len());
    }

    let test_station = &json[0];
    assert_eq!(test_station["lines"], serde_json::json!(["A"]));
    assert_eq!(test_station["borough"], "Manhattan");
    assert_eq!(test_station["artworks"][1]["art_title"], "Test Artwork 2");
}

#[tokio::test]
async fn stations_by_borough_keep_their_own_art() {
    let (_, json) = get("/stations?borough=Q").await;
    assert_eq!(ids(&json, "station_id"), vec!["Q1"]);
    assert_eq!(json[0]["artworks"][0]["art_id"], "ART3");

    let (_, json) = get("/stations?borough=bk").await;
    assert_eq!(ids(&json, "station_id"), vec!["S1", "K1"]);
    assert_eq!(json[1]["artworks"][0]["art_id"], "ART4");
}

#[tokio::test]
async fn diagnostics_report_counts() {
    let (status, json) = get("/diagnostics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stations"]["loaded"], 4);
    assert_eq!(json["artworks"]["loaded"], 7);
    assert_eq!(json["unjoinable_artworks"], 1);
    assert_eq!(json["unmatched_artworks"], 1);
}

#[tokio::test]
async fn health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}
