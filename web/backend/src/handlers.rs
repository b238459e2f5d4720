use crate::error::ApiError;
use crate::models::{
    ArtistPayload, HealthResponse, NicheRequest, NicheResponse, RecommendedArtist, SearchQuery,
    SearchResponse, TokenRequest, UserRecommendationsResponse,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, header},
};
use nichefy_core::Credential;
use std::sync::Arc;

/// Spotify caps search pages at 50 items
const MAX_SEARCH_LIMIT: usize = 50;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Nichefy API is running".to_string(),
    })
}

/// Bearer token from the `Authorization` header, else the fallback token
/// supplied with the request.
fn extract_credential(
    headers: &HeaderMap,
    fallback: Option<String>,
) -> Result<Credential, ApiError> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string());

    from_header
        .into_iter()
        .chain(fallback)
        .find(|token| !token.trim().is_empty())
        .map(|token| Credential::new(token.trim()))
        .ok_or(ApiError::MissingCredential)
}

pub async fn recommend_niche(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<NicheRequest>,
) -> Result<Json<NicheResponse>, ApiError> {
    let artist_id = request
        .artist_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("artist_id is required".to_string()))?;

    let credential = extract_credential(&headers, request.access_token)?;

    let result = state.engine.find_niche(&artist_id, &credential).await?;

    if result.is_empty() {
        tracing::info!(artist_id = %artist_id, "No niche artists found");
    }

    let search_stats = result.stats.clone();
    let artists: Vec<ArtistPayload> = result
        .into_artists()
        .into_iter()
        .map(ArtistPayload::from)
        .collect();

    Ok(Json(NicheResponse {
        success: true,
        count: artists.len(),
        artists,
        search_stats,
    }))
}

pub async fn recommend_for_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    request: Option<Json<TokenRequest>>,
) -> Result<Json<UserRecommendationsResponse>, ApiError> {
    let fallback = request.and_then(|Json(body)| body.access_token);
    let credential = extract_credential(&headers, fallback)?;

    let recommendations = state
        .engine
        .recommend_for_top_artists(&credential, state.top_artists_limit)
        .await?;

    let artists: Vec<RecommendedArtist> = recommendations
        .into_iter()
        .map(RecommendedArtist::from)
        .collect();

    Ok(Json(UserRecommendationsResponse {
        success: true,
        count: artists.len(),
        artists,
    }))
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'q' is required".to_string()))?
        .to_string();

    let credential = extract_credential(&headers, params.access_token)?;
    let limit = params.limit.clamp(1, MAX_SEARCH_LIMIT);

    let artists: Vec<ArtistPayload> = state
        .engine
        .provider()
        .search_artists(&query, limit, &credential)
        .await?
        .into_iter()
        .map(ArtistPayload::from)
        .collect();

    Ok(Json(SearchResponse {
        success: true,
        query,
        count: artists.len(),
        artists,
    }))
}

pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(artist_id): Path<String>,
) -> Result<Json<ArtistPayload>, ApiError> {
    let credential = extract_credential(&headers, None)?;

    let artist = state
        .engine
        .provider()
        .get_artist(&artist_id, &credential)
        .await?;

    Ok(Json(artist.into()))
}
