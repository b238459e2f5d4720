use nichefy_core::{Artist, NicheRecommendation, SearchStats};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Artist as returned to clients
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArtistPayload {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub popularity: u8,
    pub spotify_url: String,
    pub genres: Vec<String>,
}

impl From<Artist> for ArtistPayload {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            image: artist.image_url,
            popularity: artist.popularity,
            spotify_url: artist.catalog_url,
            genres: artist.genres,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct NicheRequest {
    #[serde(default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct NicheResponse {
    pub success: bool,
    pub artists: Vec<ArtistPayload>,
    pub count: usize,
    pub search_stats: SearchStats,
}

#[derive(Deserialize, Default)]
pub struct TokenRequest {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RecommendedArtist {
    #[serde(flatten)]
    pub artist: ArtistPayload,
    pub recommended_from: String,
}

impl From<NicheRecommendation> for RecommendedArtist {
    fn from(recommendation: NicheRecommendation) -> Self {
        Self {
            artist: recommendation.niche_artist.into(),
            recommended_from: recommendation.original_artist.id,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct UserRecommendationsResponse {
    pub success: bool,
    pub artists: Vec<RecommendedArtist>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_limit() -> usize {
    10
}

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub artists: Vec<ArtistPayload>,
    pub count: usize,
}
