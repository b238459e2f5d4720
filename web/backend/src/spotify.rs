use async_trait::async_trait;
use nichefy_core::{Artist, ArtistGraphProvider, Credential, MAX_POPULARITY, ProviderError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpotifyArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
    #[serde(default)]
    pub external_urls: SpotifyExternalUrls,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpotifyImage {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SpotifyExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpotifyRelatedArtistsResponse {
    pub artists: Vec<SpotifyArtist>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpotifyTopArtistsResponse {
    pub items: Vec<SpotifyArtist>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpotifySearchResponse {
    pub artists: SpotifyPaging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpotifyPaging {
    #[serde(default)]
    pub items: Vec<SpotifyArtist>,
}

impl From<SpotifyArtist> for Artist {
    fn from(artist: SpotifyArtist) -> Self {
        let catalog_url = artist
            .external_urls
            .spotify
            .unwrap_or_else(|| format!("https://open.spotify.com/artist/{}", artist.id));

        Artist {
            image_url: artist.images.into_iter().next().map(|image| image.url),
            popularity: artist.popularity.min(MAX_POPULARITY as u32) as u8,
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            catalog_url,
        }
    }
}

/// Spotify Web API client for artist lookups
pub struct SpotifyClient {
    client: Client,
    base_url: String,
}

impl SpotifyClient {
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
        credential: &Credential,
    ) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .bearer_auth(credential.expose())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status, resource, message));
        }

        response.json::<T>().await.map_err(transport_error)
    }
}

fn transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Unavailable("Spotify request timed out".to_string())
    } else {
        ProviderError::Unavailable(error.to_string())
    }
}

/// Maps a non-success Spotify status onto the provider error kinds.
pub fn status_error(status: StatusCode, resource: &str, message: String) -> ProviderError {
    match status {
        // Spotify answers malformed ids with 400 "invalid id"
        StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => {
            ProviderError::NotFound(resource.to_string())
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ProviderError::Unauthorized(format!("Spotify rejected the access token ({})", status))
        }
        _ => ProviderError::Unavailable(format!("Spotify returned {}: {}", status, message.trim())),
    }
}

#[async_trait]
impl ArtistGraphProvider for SpotifyClient {
    async fn get_artist(&self, id: &str, credential: &Credential) -> Result<Artist, ProviderError> {
        let path = format!("/artists/{}", urlencoding::encode(id));
        let artist: SpotifyArtist = self.get_json(&path, &[], id, credential).await?;
        Ok(artist.into())
    }

    async fn get_related_artists(
        &self,
        id: &str,
        credential: &Credential,
    ) -> Result<Vec<Artist>, ProviderError> {
        let path = format!("/artists/{}/related-artists", urlencoding::encode(id));
        let response: SpotifyRelatedArtistsResponse =
            self.get_json(&path, &[], id, credential).await?;
        Ok(response.artists.into_iter().map(Artist::from).collect())
    }

    async fn get_top_artists(
        &self,
        credential: &Credential,
        limit: usize,
    ) -> Result<Vec<Artist>, ProviderError> {
        let query = [
            ("limit", limit.to_string()),
            ("offset", "0".to_string()),
            ("time_range", "medium_term".to_string()),
        ];
        let response: SpotifyTopArtistsResponse = self
            .get_json("/me/top/artists", &query, "me/top/artists", credential)
            .await?;
        Ok(response.items.into_iter().map(Artist::from).collect())
    }

    async fn search_artists(
        &self,
        query: &str,
        limit: usize,
        credential: &Credential,
    ) -> Result<Vec<Artist>, ProviderError> {
        let params = [
            ("q", query.to_string()),
            ("type", "artist".to_string()),
            ("limit", limit.to_string()),
        ];
        let response: SpotifySearchResponse =
            self.get_json("/search", &params, "search", credential).await?;
        Ok(response.artists.items.into_iter().map(Artist::from).collect())
    }

    fn name(&self) -> &'static str {
        "spotify"
    }
}
