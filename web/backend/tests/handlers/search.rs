use crate::fixtures::{TOKEN, get, send};
use axum::http::StatusCode;
use nichefy_web::models::{ErrorResponse, HealthResponse, SearchResponse};

#[tokio::test]
async fn test_health_check() {
    let (status, response): (_, HealthResponse) = send(get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.status, "ok");
}

#[tokio::test]
async fn test_search_artists_basic() {
    let (status, response): (_, SearchResponse) =
        send(get("/api/search/artists?q=swirl", Some(TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.query, "swirl");
    assert_eq!(response.count, 1);
    assert_eq!(response.artists[0].name, "Swirlies");
}

#[tokio::test]
async fn test_search_artists_respects_limit() {
    let (_, response): (_, SearchResponse) =
        send(get("/api/search/artists?q=s&limit=2", Some(TOKEN))).await;

    let names: Vec<&str> = response.artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Drop Nineteens", "Flying Saucer Attack"]);
}

#[tokio::test]
async fn test_search_artists_limit_is_clamped() {
    let (_, response): (_, SearchResponse) =
        send(get("/api/search/artists?q=s&limit=0", Some(TOKEN))).await;

    assert_eq!(response.count, 1);
}

#[tokio::test]
async fn test_search_artists_token_in_query() {
    let (status, response): (_, SearchResponse) = send(get(
        &format!("/api/search/artists?q=ride&access_token={}", TOKEN),
        None,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.artists[0].id, "ride");
}

#[tokio::test]
async fn test_search_artists_requires_query() {
    let (status, response): (_, ErrorResponse) =
        send(get("/api/search/artists?q=%20", Some(TOKEN))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.error.contains("'q'"));

    let (status, _): (_, ErrorResponse) = send(get("/api/search/artists", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_artists_requires_credential() {
    let (status, _): (_, ErrorResponse) = send(get("/api/search/artists?q=ride", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
