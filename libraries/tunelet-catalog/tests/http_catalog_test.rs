//! Integration tests for the catalog HTTP client against a mock server.

use serde_json::json;
use tunelet_catalog::HttpCatalog;
use tunelet_core::{Catalog, CatalogError, TrackId};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn track_json(id: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "artist": { "name": "Daft Punk" },
        "album": { "cover_medium": format!("https://cdn.example/{id}.jpg") },
        "duration": 224,
    })
}

#[tokio::test]
async fn track_detail_parses_preview() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/3135556"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3135556,
            "title": "Harder, Better, Faster, Stronger",
            "preview": "https://cdn.example/preview/3135556.mp3",
        })))
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let detail = catalog.track_detail(TrackId(3135556)).await.unwrap();

    assert_eq!(detail.id, TrackId(3135556));
    assert_eq!(
        detail.preview_url.as_deref(),
        Some("https://cdn.example/preview/3135556.mp3")
    );
}

#[tokio::test]
async fn track_detail_without_preview_field_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "title": "No Clip" })),
        )
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let detail = catalog.track_detail(TrackId(1)).await.unwrap();
    assert_eq!(detail.preview_url, None);
}

#[tokio::test]
async fn track_detail_empty_preview_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "title": "Empty Clip",
            "preview": "",
        })))
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let detail = catalog.track_detail(TrackId(2)).await.unwrap();
    assert_eq!(detail.preview_url, None);
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/9"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let err = catalog.track_detail(TrackId(9)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status(500)));
}

#[tokio::test]
async fn undecodable_body_maps_to_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let err = catalog.track_detail(TrackId(9)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_catalog_maps_to_unreachable() {
    // Nothing listens on port 9; the connection is refused.
    let catalog = HttpCatalog::new("http://127.0.0.1:9").unwrap();
    let err = catalog.track_detail(TrackId(1)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Unreachable(_)));
}

#[tokio::test]
async fn invalid_base_url_is_rejected() {
    let err = HttpCatalog::new("ftp://catalog.example").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidUrl(_)));
}

#[tokio::test]
async fn chart_page_parses_tracks_and_next_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart/0/tracks"))
        .and(query_param("index", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [track_json(1, "One More Time"), track_json(2, "Aerodynamic")],
            "total": 100,
            "next": "https://api.example/chart/0/tracks?index=27",
        })))
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let page = catalog.chart_tracks(25).await.unwrap();

    assert_eq!(page.tracks.len(), 2);
    assert_eq!(page.tracks[0].id, TrackId(1));
    assert_eq!(page.tracks[0].title, "One More Time");
    assert_eq!(page.tracks[0].artist, "Daft Punk");
    assert_eq!(page.tracks[0].cover_url, "https://cdn.example/1.jpg");
    assert_eq!(page.tracks[0].duration_secs, 224);
    assert_eq!(page.total, Some(100));
    assert_eq!(page.next_index, Some(27));
}

#[tokio::test]
async fn last_chart_page_has_no_next_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart/0/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [track_json(99, "Last One")],
            "total": 100,
        })))
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let page = catalog.chart_tracks(75).await.unwrap();
    assert!(!page.has_more());
}

#[tokio::test]
async fn search_percent_encodes_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "daft punk & friends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [track_json(7, "Around the World")],
        })))
        .mount(&server)
        .await;

    let catalog = HttpCatalog::new(server.uri()).unwrap();
    let tracks = catalog.search("daft punk & friends").await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, TrackId(7));
}
