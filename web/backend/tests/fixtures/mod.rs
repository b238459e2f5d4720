use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use nichefy_core::{
    Artist, ArtistGraphProvider, Credential, NicheSearchConfig, NicheSearchEngine, ProviderError,
};
use nichefy_web::{router, state::AppState};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TOKEN: &str = "valid-token";

pub fn artist(id: &str, name: &str, popularity: u8) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
        genres: vec!["shoegaze".to_string()],
        image_url: Some(format!("https://i.scdn.co/image/{}", id)),
        catalog_url: format!("https://open.spotify.com/artist/{}", id),
    }
}

/// Small catalog: one famous seed with niche and bridging neighbours.
pub struct TestCatalog {
    artists: FxHashMap<String, Artist>,
    related: FxHashMap<String, Vec<String>>,
    unavailable: Vec<String>,
    top: Vec<String>,
}

impl TestCatalog {
    pub fn new() -> Self {
        let artists = [
            artist("slowdive", "Slowdive", 72),
            artist("ride", "Ride", 55),
            artist("drop", "Drop Nineteens", 18),
            artist("swirlies", "Swirlies", 12),
            artist("pale", "Pale Saints", 15),
            artist("lush", "Lush", 40),
            artist("flying", "Flying Saucer Attack", 9),
            artist("broken", "Broken Branch", 30),
        ];

        let mut related = FxHashMap::default();
        related.insert(
            "slowdive".to_string(),
            vec!["ride".to_string(), "drop".to_string(), "lush".to_string()],
        );
        related.insert(
            "ride".to_string(),
            vec!["slowdive".to_string(), "swirlies".to_string(), "drop".to_string()],
        );
        related.insert("lush".to_string(), vec!["pale".to_string()]);
        related.insert(
            "onlybroken".to_string(),
            vec!["broken".to_string(), "ride".to_string()],
        );
        related.insert("broken".to_string(), vec!["flying".to_string()]);

        Self {
            artists: artists.into_iter().map(|a| (a.id.clone(), a)).collect(),
            related,
            unavailable: vec!["down".to_string(), "broken".to_string()],
            top: vec!["slowdive".to_string(), "ride".to_string()],
        }
    }

    fn check(&self, credential: &Credential) -> Result<(), ProviderError> {
        if credential.expose() == TOKEN {
            Ok(())
        } else {
            Err(ProviderError::Unauthorized("invalid access token".to_string()))
        }
    }
}

#[async_trait]
impl ArtistGraphProvider for TestCatalog {
    async fn get_artist(&self, id: &str, credential: &Credential) -> Result<Artist, ProviderError> {
        self.check(credential)?;
        self.artists
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }

    async fn get_related_artists(
        &self,
        id: &str,
        credential: &Credential,
    ) -> Result<Vec<Artist>, ProviderError> {
        self.check(credential)?;
        if self.unavailable.iter().any(|down| down == id) {
            return Err(ProviderError::Unavailable("Spotify returned 503".to_string()));
        }

        let related = self
            .related
            .get(id)
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))?;

        Ok(related
            .iter()
            .filter_map(|related_id| self.artists.get(related_id).cloned())
            .collect())
    }

    async fn get_top_artists(
        &self,
        credential: &Credential,
        limit: usize,
    ) -> Result<Vec<Artist>, ProviderError> {
        self.check(credential)?;
        Ok(self
            .top
            .iter()
            .take(limit)
            .filter_map(|id| self.artists.get(id).cloned())
            .collect())
    }

    async fn search_artists(
        &self,
        query: &str,
        limit: usize,
        credential: &Credential,
    ) -> Result<Vec<Artist>, ProviderError> {
        self.check(credential)?;
        let query = query.to_lowercase();
        let mut found: Vec<Artist> = self
            .artists
            .values()
            .filter(|a| a.name.to_lowercase().contains(&query))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found.truncate(limit);
        Ok(found)
    }

    fn name(&self) -> &'static str {
        "test-catalog"
    }
}

pub fn create_test_app() -> Router {
    let engine = NicheSearchEngine::new(Arc::new(TestCatalog::new()), NicheSearchConfig::default());
    router(Arc::new(AppState::new(engine, 8)))
}

pub fn post_json(uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send<T: DeserializeOwned>(request: Request<Body>) -> (StatusCode, T) {
    let response = create_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
